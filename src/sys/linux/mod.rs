use gtk::{
    gdk::{Display, Monitor, Rectangle},
    prelude::MonitorExt,
};
use tracing::debug;

use crate::{
    protocol::{MonitorInfo, ScreenError, ScreenRect},
    sys::convert,
};

pub use self::screen::Screen;

mod screen;

// GDK uses a top-left origin with y growing downward, but on X11 that origin is the top-left
// of the whole desktop rather than of the primary monitor. Everything is shifted by the
// primary monitor's native origin. The scale factor is the integer factor GDK applies to the
// application.

pub type WindowHandle = gtk::Window;

pub fn monitors() -> Result<Vec<MonitorInfo>, ScreenError> {
    Ok(monitors_of(&default_display()?))
}

pub fn primary_monitor() -> Result<Option<MonitorInfo>, ScreenError> {
    let display = default_display()?;
    match display.primary_monitor() {
        Some(primary) => Ok(Some(monitor_info(&primary, origin(&display)))),
        None => Ok(convert::at_origin(&monitors_of(&display))),
    }
}

fn default_display() -> Result<Display, ScreenError> {
    // GDK asserts instead of failing when used before `gtk::init` or off the main thread.
    if !gtk::is_initialized_main_thread() {
        return Err(ScreenError::NotInitialized);
    }

    Display::default().ok_or(ScreenError::NoDisplay)
}

pub(crate) fn monitors_of(display: &Display) -> Vec<MonitorInfo> {
    let native = (0..display.n_monitors())
        .filter_map(|index| display.monitor(index))
        .map(|monitor| monitor_info(&monitor, (0, 0)))
        .collect();

    let monitors = convert::rebased_monitors(native, origin(display));
    for monitor in &monitors {
        debug!(?monitor, "enumerated monitor");
    }
    monitors
}

/// The native top-left corner of the primary monitor. Without a primary monitor the desktop
/// origin is kept.
pub(crate) fn origin(display: &Display) -> (i32, i32) {
    display
        .primary_monitor()
        .map(|primary| {
            let geometry = primary.geometry();
            (geometry.x(), geometry.y())
        })
        .unwrap_or((0, 0))
}

pub(crate) fn monitor_info(monitor: &Monitor, origin: (i32, i32)) -> MonitorInfo {
    let (dx, dy) = (origin.0.saturating_neg(), origin.1.saturating_neg());
    MonitorInfo {
        bounds: rect(&monitor.geometry()).offset(dx, dy),
        work_area: rect(&monitor.workarea()).offset(dx, dy),
        scale: f64::from(monitor.scale_factor()),
    }
}

fn rect(rect: &Rectangle) -> ScreenRect {
    ScreenRect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

use objc2::rc::Id;
use objc2_app_kit::{NSScreen, NSWindow};
use objc2_foundation::{MainThreadMarker, NSRect};
use tracing::debug;

use crate::{
    protocol::{MonitorInfo, ScreenError, ScreenRect},
    sys::convert::{self, FlippedScreen},
};

pub use self::screen::Screen;

mod screen;

// Some notes about macOS:
// AppKit puts the origin at the bottom-left of the primary display and y grows upward. All
// values are in points, so the system already did the scaling for us.

pub type WindowHandle = Id<NSWindow>;

pub fn monitors() -> Result<Vec<MonitorInfo>, ScreenError> {
    let mtm = MainThreadMarker::new().ok_or(ScreenError::NotMainThread)?;
    Ok(monitors_on(mtm))
}

pub fn primary_monitor() -> Result<Option<MonitorInfo>, ScreenError> {
    Ok(convert::at_origin(&monitors()?))
}

pub(crate) fn monitors_on(mtm: MainThreadMarker) -> Vec<MonitorInfo> {
    let monitors = convert::flipped_monitors(&native_screens(mtm));
    for monitor in &monitors {
        debug!(?monitor, "enumerated monitor");
    }
    monitors
}

pub(crate) fn native_screens(mtm: MainThreadMarker) -> Vec<FlippedScreen> {
    let screens = unsafe { NSScreen::screens(mtm) };
    screens.iter().map(|screen| native_screen(&screen)).collect()
}

pub(crate) fn native_screen(screen: &NSScreen) -> FlippedScreen {
    FlippedScreen {
        frame: rect(unsafe { screen.frame() }),
        visible_frame: rect(unsafe { screen.visibleFrame() }),
    }
}

pub(crate) fn rect(rect: NSRect) -> ScreenRect {
    ScreenRect::new(
        convert::to_units(rect.origin.x),
        convert::to_units(rect.origin.y),
        convert::to_units(rect.size.width),
        convert::to_units(rect.size.height),
    )
}

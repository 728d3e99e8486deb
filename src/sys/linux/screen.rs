use gtk::{gdk::Display, prelude::*};
use tracing::debug;

use crate::protocol::{MonitorInfo, Placement, ScreenError, ScreenRect};

use super::WindowHandle;

// NOTE: GTK objects are neither `Send` nor `Sync`, so a `gtk::Window` can only be used on the
//       thread that initialized GTK.
#[derive(Debug)]
pub struct Screen {
    inner: gtk::Window,
}

impl Screen {
    pub fn new(window: gtk::Window) -> Screen {
        Screen { inner: window }
    }

    pub fn handle(&self) -> &WindowHandle {
        &self.inner
    }

    pub fn monitors(&self) -> Result<Vec<MonitorInfo>, ScreenError> {
        Ok(super::monitors_of(&self.display()))
    }

    pub fn placement(&self) -> Result<Placement, ScreenError> {
        let display = self.display();
        let (origin_x, origin_y) = super::origin(&display);

        let (x, y) = self.inner.position();
        let (width, height) = self.inner.size();
        let bounds = ScreenRect::new(x, y, width, height)
            .offset(origin_x.saturating_neg(), origin_y.saturating_neg());

        let monitor = match self
            .inner
            .window()
            .and_then(|window| display.monitor_at_window(&window))
        {
            Some(monitor) => super::monitor_info(&monitor, (origin_x, origin_y)),
            // Not realized yet, so GDK can't tell which monitor it is on.
            None => {
                let monitors = super::monitors_of(&display);
                MonitorInfo::nearest(&monitors, &bounds)
                    .copied()
                    .unwrap_or_default()
            }
        };

        Ok(Placement { bounds, monitor })
    }

    pub fn set_bounds(&self, bounds: ScreenRect) -> Result<(), ScreenError> {
        let (origin_x, origin_y) = super::origin(&self.display());
        let native = bounds.offset(origin_x, origin_y);

        // The window manager applies these asynchronously, reading the frame right after
        // would still return the old one. GTK rejects a zero size.
        self.inner.move_(native.x, native.y);
        self.inner.resize(native.width.max(1), native.height.max(1));
        debug!(?bounds, ?native, "requested window bounds");

        Ok(())
    }

    fn display(&self) -> Display {
        WidgetExt::display(&self.inner)
    }
}

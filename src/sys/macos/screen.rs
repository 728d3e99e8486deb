use objc2::rc::Id;
use objc2_app_kit::NSWindow;
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize};
use tracing::{debug, warn};

use crate::{
    protocol::{MonitorInfo, Placement, ScreenError, ScreenRect},
    sys::convert,
};

use super::WindowHandle;

// NOTE: `NSWindow` is main thread only, so holding an `Id<NSWindow>` already proves we're on
//       the main thread. Every method derives its `MainThreadMarker` from the window.
#[derive(Debug)]
pub struct Screen {
    inner: Id<NSWindow>,
}

impl Screen {
    pub fn new(window: Id<NSWindow>) -> Screen {
        Screen { inner: window }
    }

    pub fn handle(&self) -> &WindowHandle {
        &self.inner
    }

    pub fn monitors(&self) -> Result<Vec<MonitorInfo>, ScreenError> {
        Ok(super::monitors_on(self.mtm()))
    }

    pub fn placement(&self) -> Result<Placement, ScreenError> {
        let screens = super::native_screens(self.mtm());
        let frame = super::rect(unsafe { self.inner.frame() });

        let Some(height) = convert::reference_height(screens.iter().map(|screen| &screen.frame))
        else {
            // Without displays there is nothing to flip against.
            warn!("no screens while reading window placement");
            return Ok(Placement {
                bounds: frame,
                monitor: MonitorInfo::default(),
            });
        };

        let bounds = frame.flipped(height);
        let monitor = match unsafe { self.inner.screen() } {
            Some(screen) => {
                let native = super::native_screen(&screen);
                MonitorInfo {
                    bounds: native.frame.flipped(height),
                    work_area: native.visible_frame.flipped(height),
                    scale: 1.0,
                }
            }
            // The window is offscreen or not yet ordered in, pick what it would land on.
            None => {
                let monitors = convert::flipped_monitors(&screens);
                MonitorInfo::nearest(&monitors, &bounds)
                    .copied()
                    .unwrap_or_default()
            }
        };

        Ok(Placement { bounds, monitor })
    }

    pub fn set_bounds(&self, bounds: ScreenRect) -> Result<(), ScreenError> {
        let screens = super::native_screens(self.mtm());
        let height = convert::reference_height(screens.iter().map(|screen| &screen.frame))
            .ok_or(ScreenError::NoDisplay)?;

        let native = bounds.flipped(height);
        let frame = NSRect::new(
            NSPoint::new(f64::from(native.x), f64::from(native.y)),
            NSSize::new(f64::from(native.width), f64::from(native.height)),
        );
        unsafe { self.inner.setFrame_display_animate(frame, true, false) };
        debug!(?bounds, ?native, "applied window bounds");

        Ok(())
    }

    fn mtm(&self) -> MainThreadMarker {
        MainThreadMarker::from(&*self.inner)
    }
}

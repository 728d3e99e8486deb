use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::{rect::ScreenRect, screen::Screen};

mod rect;
mod screen;

/// Geometry of a single display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorInfo {
    /// The full extent of the display.
    pub bounds: ScreenRect,
    /// The part of the display usable by windows, excluding taskbars, menu bars, and docks.
    ///
    /// Equal to `bounds` on platforms without a work area notion.
    pub work_area: ScreenRect,
    /// The ratio of physical pixels to screen units, `1.0` meaning unscaled.
    pub scale: f64,
}

impl MonitorInfo {
    /// Whether this is the zero-value monitor returned when a window could not be matched
    /// to any display.
    pub fn is_zero(&self) -> bool {
        *self == MonitorInfo::default()
    }

    /// The size of the display in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        (
            (f64::from(self.bounds.width) * scale).round() as u32,
            (f64::from(self.bounds.height) * scale).round() as u32,
        )
    }

    /// Find the monitor best suited to hold `frame`.
    ///
    /// That is the monitor sharing the largest area with the frame. When the frame overlaps
    /// no monitor (or several equally), the monitor whose center is closest to the frame's
    /// center wins. Returns `None` only for an empty list.
    pub fn nearest<'a, I>(monitors: I, frame: &ScreenRect) -> Option<&'a MonitorInfo>
    where
        I: IntoIterator<Item = &'a MonitorInfo>,
    {
        let (frame_x, frame_y) = frame.center();
        monitors.into_iter().max_by_key(|monitor| {
            let overlap = monitor
                .bounds
                .intersection(frame)
                .map_or(0, |shared| shared.area());
            let (x, y) = monitor.bounds.center();
            let distance = (i64::from(x) - i64::from(frame_x)).pow(2)
                + (i64::from(y) - i64::from(frame_y)).pow(2);
            // `max_by_key` keeps the last maximum, so the distance is negated to prefer closer.
            (overlap, -distance)
        })
    }
}

/// The bounds of a window together with the monitor it is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The frame of the window, including decorations.
    pub bounds: ScreenRect,
    /// The monitor under the window, or [`MonitorInfo::default`](MonitorInfo::default) if
    /// none could be resolved.
    pub monitor: MonitorInfo,
}

/// An error caused by the underlying display server or windowing system.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// No display server could be reached.
    #[error("no display is available")]
    NoDisplay,
    /// The toolkit has not been initialized on the calling thread.
    #[error("the windowing toolkit is not initialized on this thread")]
    NotInitialized,
    /// The operation must run on the main thread.
    #[error("display queries must run on the main thread")]
    NotMainThread,
    /// The handle to the window is invalid. This could mean it no longer exists.
    #[error("the window handle is invalid")]
    InvalidHandle,
    /// The work could not be handed to the thread owning the window.
    #[error("failed to run on the thread owning the window")]
    DispatchFailed,
    /// There is no display backend for this target.
    #[error("display geometry is not supported on this platform")]
    Unsupported,
    /// There was a failure in the operating system.
    #[error("operating system error: {0}")]
    Os(#[from] io::Error),
}

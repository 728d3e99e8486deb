//! Cross-platform display and window geometry.
//!
//! Every value this crate hands out lives in one coordinate space: the origin is the top-left
//! corner of the primary monitor and the y axis grows downward, no matter what the native
//! windowing system uses. Nothing is cached, every call queries the system again.

use tracing::warn;

pub use protocol::{MonitorInfo, Placement, Screen, ScreenError, ScreenRect};
pub use sys::WindowHandle;

mod protocol;
mod sys;

/// All currently connected monitors, in the order the operating system lists them.
///
/// The first monitor is not necessarily the primary one, see
/// [`primary_monitor`](primary_monitor).
///
/// On macOS this must be called from the main thread. On Linux GTK must be initialized on the
/// calling thread.
#[inline]
pub fn monitors() -> Result<Vec<MonitorInfo>, ScreenError> {
    sys::monitors()
}

/// Like [`monitors`](monitors), but a failure is logged and treated as no monitors at all.
pub fn monitors_or_empty() -> Vec<MonitorInfo> {
    monitors().unwrap_or_else(|err| {
        warn!(%err, "failed to enumerate monitors");
        Vec::new()
    })
}

/// The primary monitor, whose top-left corner is the origin of the coordinate space.
#[inline]
pub fn primary_monitor() -> Result<Option<MonitorInfo>, ScreenError> {
    sys::primary_monitor()
}

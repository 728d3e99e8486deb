// Each backend exposes the same items: `WindowHandle`, `Screen`, `monitors` and
// `primary_monitor`. Exactly one of them is compiled in.

#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
mod platform;

#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
mod platform;

#[cfg(all(target_os = "linux", feature = "gtk"))]
#[path = "linux/mod.rs"]
mod platform;

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    all(target_os = "linux", feature = "gtk")
)))]
#[path = "unsupported.rs"]
mod platform;

pub(crate) mod convert;
pub(crate) mod retry;

pub use platform::{monitors, primary_monitor, Screen, WindowHandle};

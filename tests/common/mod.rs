#[macro_export]
macro_rules! init_display {
    () => {
        // NOTE: on macOS, display queries MUST run on the main (UI) thread. Unfortunately, it's no longer possible to do
        //       with cargo test, so we use libtest_mimic and libtest_mimic_collect for the macros. Note that
        //       --test-threads=1 must be passed to run on the main thread.
        //
        //       relevant issue: https://github.com/rust-lang/rust/issues/104053
        fn main() {
            ::libtest_mimic_collect::TestCollection::run();
        }
    };
}

use screen_geometry::{MonitorInfo, ScreenError};

/// Enumerate monitors, treating an unreachable display server as a skipped test rather than a
/// failure. Test machines are frequently headless.
pub fn live_monitors() -> Option<Vec<MonitorInfo>> {
    match screen_geometry::monitors() {
        Ok(monitors) => Some(monitors),
        Err(
            ScreenError::NoDisplay
            | ScreenError::NotInitialized
            | ScreenError::NotMainThread
            | ScreenError::Unsupported,
        ) => None,
        Err(err) => panic!("unexpected enumeration failure: {err}"),
    }
}

#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

use tracing::debug;

use crate::protocol::{ScreenError, ScreenRect};

/// Native read and write access to a window frame, in canonical coordinates.
pub(crate) trait NativeFrame {
    fn frame(&self) -> Result<ScreenRect, ScreenError>;

    fn apply(&self, bounds: ScreenRect) -> Result<(), ScreenError>;
}

/// What happened when applying bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// The first attempt landed where requested.
    Exact,
    /// The system moved the window elsewhere, the second attempt landed where requested.
    Corrected,
    /// Both attempts were moved elsewhere by the system. The final frame is accepted.
    Drifted(ScreenRect),
}

/// Apply `bounds` and reapply it once if the system placed the window elsewhere.
///
/// Moving a window onto a monitor with a different DPI makes Windows send `WM_DPICHANGED`,
/// and the default handling of that message rescales the window around the suggested rect,
/// undoing the requested position. Applying the same bounds a second time, now that the
/// window already has the target DPI, sticks. There is never a third attempt.
pub(crate) fn apply_with_retry<N>(native: &N, bounds: ScreenRect) -> Result<Applied, ScreenError>
where
    N: NativeFrame + ?Sized,
{
    native.apply(bounds)?;
    let actual = native.frame()?;
    if actual == bounds {
        return Ok(Applied::Exact);
    }

    debug!(?bounds, ?actual, "window placed elsewhere, applying bounds again");
    native.apply(bounds)?;
    let actual = native.frame()?;
    if actual == bounds {
        Ok(Applied::Corrected)
    } else {
        debug!(?bounds, ?actual, "window still placed elsewhere, accepting");
        Ok(Applied::Drifted(actual))
    }
}

use crate::{
    protocol::{MonitorInfo, Placement, ScreenError, ScreenRect},
    sys::{self, WindowHandle},
};

/// The geometry of the application window and the displays around it.
///
/// A [`Screen`](Screen) only borrows the native window, it never creates nor destroys it. All
/// values are in the canonical coordinate space, whatever the platform reports natively.
#[derive(Debug)]
pub struct Screen(pub(crate) sys::Screen);

impl Screen {
    /// Wrap the native handle of the application window.
    #[inline]
    pub fn new(handle: WindowHandle) -> Screen {
        Screen(sys::Screen::new(handle))
    }

    /// The native handle this screen operates on.
    #[inline]
    pub fn handle(&self) -> &WindowHandle {
        self.0.handle()
    }

    /// All currently connected monitors, in the order the operating system lists them.
    #[inline]
    pub fn monitors(&self) -> Result<Vec<MonitorInfo>, ScreenError> {
        self.0.monitors()
    }

    /// The current bounds of the window and the monitor it is on.
    ///
    /// If the window cannot be matched to a monitor, the monitor is the zero-value
    /// [`MonitorInfo`](MonitorInfo).
    #[inline]
    pub fn placement(&self) -> Result<Placement, ScreenError> {
        self.0.placement()
    }

    /// Move and resize the window.
    ///
    /// This is best-effort. On Windows, if the system repositions the window differently
    /// (usually because the move crossed monitors of different DPI), the bounds are applied
    /// one more time and whatever results is accepted.
    #[inline]
    pub fn set_bounds(&self, bounds: ScreenRect) -> Result<(), ScreenError> {
        self.0.set_bounds(bounds)
    }

    /// Run `f` on the thread owning the window and wait for it to complete.
    ///
    /// Runs `f` directly if the calling thread already owns the window. Otherwise `f` runs on
    /// the owning thread, so it and its output must be [`Send`](Send).
    #[cfg(target_os = "windows")]
    #[inline]
    pub fn run_on_owner_thread<R, F>(&self, f: F) -> Result<R, ScreenError>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.0.run_on_owner_thread(f)
    }
}

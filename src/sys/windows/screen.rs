use std::{io, mem};

use tracing::debug;
use windows_sys::Win32::{
    Foundation::{FALSE, HWND, RECT},
    Graphics::Gdi::{MonitorFromWindow, MONITOR_DEFAULTTONEAREST},
    UI::WindowsAndMessaging::{
        GetWindowRect, IsWindow, SetWindowPos, SWP_NOACTIVATE, SWP_NOZORDER,
    },
};

use crate::{
    protocol::{MonitorInfo, Placement, ScreenError, ScreenRect},
    sys::retry::{self, NativeFrame},
};

use super::{dispatch, WindowHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    inner: HWND,
}

impl Screen {
    pub fn new(hwnd: HWND) -> Screen {
        Screen { inner: hwnd }
    }

    pub fn handle(&self) -> &WindowHandle {
        &self.inner
    }

    pub fn monitors(&self) -> Result<Vec<MonitorInfo>, ScreenError> {
        super::monitors()
    }

    pub fn placement(&self) -> Result<Placement, ScreenError> {
        let bounds = self.frame()?;

        // MONITOR_DEFAULTTONEAREST never returns null for a valid window, but a window
        // destroyed in between could still end up without a monitor.
        let handle = unsafe { MonitorFromWindow(self.inner, MONITOR_DEFAULTTONEAREST) };
        let monitor = if handle == 0 {
            MonitorInfo::default()
        } else {
            super::monitor_info(handle).unwrap_or_default()
        };

        Ok(Placement { bounds, monitor })
    }

    pub fn set_bounds(&self, bounds: ScreenRect) -> Result<(), ScreenError> {
        let applied = self.run_on_owner_thread(|| retry::apply_with_retry(self, bounds))??;
        debug!(?bounds, ?applied, "applied window bounds");
        Ok(())
    }

    pub fn run_on_owner_thread<R, F>(&self, f: F) -> Result<R, ScreenError>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        dispatch::run_on_owner_thread(self.inner, f)
    }
}

impl NativeFrame for Screen {
    fn frame(&self) -> Result<ScreenRect, ScreenError> {
        let mut rect: RECT = unsafe { mem::zeroed() };
        if unsafe { GetWindowRect(self.inner, &mut rect) } == FALSE {
            return Err(last_error(self.inner));
        }

        Ok(super::rect(&rect))
    }

    fn apply(&self, bounds: ScreenRect) -> Result<(), ScreenError> {
        let result = unsafe {
            SetWindowPos(
                self.inner,
                0,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if result == FALSE {
            return Err(last_error(self.inner));
        }

        Ok(())
    }
}

fn last_error(hwnd: HWND) -> ScreenError {
    // Read before IsWindow overwrites it.
    let error = io::Error::last_os_error();
    if unsafe { IsWindow(hwnd) } == FALSE {
        ScreenError::InvalidHandle
    } else {
        ScreenError::Os(error)
    }
}

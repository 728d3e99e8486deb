use crate::{
    protocol::{MonitorInfo, Placement, ScreenError, ScreenRect},
    sys::convert,
};

// Targets without a display backend. On Linux the GDK backend needs the `gtk` feature.

/// There is no window to hand over on this target, so a [`Screen`](Screen) can't exist.
#[derive(Debug)]
pub enum WindowHandle {}

#[derive(Debug)]
pub struct Screen {
    inner: WindowHandle,
}

impl Screen {
    pub fn new(handle: WindowHandle) -> Screen {
        Screen { inner: handle }
    }

    pub fn handle(&self) -> &WindowHandle {
        &self.inner
    }

    pub fn monitors(&self) -> Result<Vec<MonitorInfo>, ScreenError> {
        match self.inner {}
    }

    pub fn placement(&self) -> Result<Placement, ScreenError> {
        match self.inner {}
    }

    pub fn set_bounds(&self, _bounds: ScreenRect) -> Result<(), ScreenError> {
        match self.inner {}
    }
}

pub fn monitors() -> Result<Vec<MonitorInfo>, ScreenError> {
    Err(ScreenError::Unsupported)
}

pub fn primary_monitor() -> Result<Option<MonitorInfo>, ScreenError> {
    Ok(convert::at_origin(&monitors()?))
}

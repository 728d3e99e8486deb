use std::{mem, ptr};

use tracing::{debug, warn};
use windows_sys::Win32::{
    Foundation::{BOOL, FALSE, HWND, LPARAM, RECT, S_OK, TRUE},
    Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO},
    UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI},
};

use crate::{
    protocol::{MonitorInfo, ScreenError, ScreenRect},
    sys::convert,
};

pub use screen::Screen;

mod dispatch;
mod screen;

pub type WindowHandle = HWND;

// All of this assumes the process is per-monitor DPI aware, so every rect is in physical pixels.
pub fn monitors() -> Result<Vec<MonitorInfo>, ScreenError> {
    let mut monitors: Vec<MonitorInfo> = Vec::new();
    let result = unsafe {
        EnumDisplayMonitors(
            0,
            ptr::null(),
            Some(enum_monitors),
            &mut monitors as *mut Vec<MonitorInfo> as LPARAM,
        )
    };

    if result == FALSE {
        // Refusing to enumerate is not worth surfacing, the caller gets no monitors.
        warn!(
            error = %std::io::Error::last_os_error(),
            "EnumDisplayMonitors failed"
        );
        return Ok(Vec::new());
    }

    Ok(monitors)
}

// The primary monitor is the one Windows puts at (0, 0).
pub fn primary_monitor() -> Result<Option<MonitorInfo>, ScreenError> {
    Ok(convert::at_origin(&monitors()?))
}

pub(crate) fn monitor_info(handle: HMONITOR) -> Option<MonitorInfo> {
    let mut info: MONITORINFO = unsafe { mem::zeroed() };
    info.cbSize = mem::size_of::<MONITORINFO>() as u32;
    if unsafe { GetMonitorInfoW(handle, &mut info) } == FALSE {
        return None;
    }

    let mut dpi_x = 0;
    let mut dpi_y = 0;
    let result = unsafe { GetDpiForMonitor(handle, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) };
    let scale = if result == S_OK {
        convert::scale_from_dpi(dpi_x)
    } else {
        1.0
    };

    Some(MonitorInfo {
        bounds: rect(&info.rcMonitor),
        work_area: rect(&info.rcWork),
        scale,
    })
}

pub(crate) fn rect(rect: &RECT) -> ScreenRect {
    ScreenRect::from_edges(rect.left, rect.top, rect.right, rect.bottom)
}

unsafe extern "system" fn enum_monitors(
    handle: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let monitors = &mut *(lparam as *mut Vec<MonitorInfo>);
    match monitor_info(handle) {
        Some(monitor) => {
            debug!(?monitor, "enumerated monitor");
            monitors.push(monitor);
        }
        // Keep going, one unreadable monitor shouldn't hide the others.
        None => debug!(handle, "skipping monitor without info"),
    }
    TRUE
}

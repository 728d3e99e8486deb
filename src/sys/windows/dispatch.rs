use std::{io, ptr, sync::LazyLock};

use windows_sys::{
    w,
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        System::Threading::GetCurrentThreadId,
        UI::WindowsAndMessaging::{
            CallNextHookEx, GetWindowThreadProcessId, RegisterWindowMessageW, SendMessageW,
            SetWindowsHookExW, UnhookWindowsHookEx, CWPSTRUCT, HC_ACTION, WH_CALLWNDPROC,
        },
    },
};

use crate::protocol::ScreenError;

// A message id unique to this crate, carrying a `*mut &mut dyn FnMut()` in its lparam.
static INVOKE_MESSAGE: LazyLock<u32> =
    LazyLock::new(|| unsafe { RegisterWindowMessageW(w!("ScreenGeometryInvoke")) });

/// Run `f` on the thread that created `hwnd`, blocking until it completes.
///
/// Win32 windows may only be mutated from the thread that owns them. When the caller is that
/// thread `f` runs immediately. Otherwise a `WH_CALLWNDPROC` hook is installed on the owning
/// thread and a message is sent to the window; the hook runs `f` as the message is delivered.
/// `SendMessageW` doesn't return before the owning thread processed the message, so `f` may
/// borrow from the caller.
///
/// `f` and its output cross threads, hence the `Send` bounds.
///
/// The owning thread must be pumping messages, otherwise this blocks forever.
pub(crate) fn run_on_owner_thread<R, F>(hwnd: HWND, f: F) -> Result<R, ScreenError>
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    let owner = unsafe { GetWindowThreadProcessId(hwnd, ptr::null_mut()) };
    if owner == 0 {
        return Err(ScreenError::InvalidHandle);
    }

    if owner == unsafe { GetCurrentThreadId() } {
        return Ok(f());
    }

    let message = *INVOKE_MESSAGE;
    if message == 0 {
        return Err(io::Error::last_os_error().into());
    }

    let mut output = None;
    {
        let mut f = Some(f);
        // Several hooks may see the same message, `take` makes sure `f` only runs once.
        let mut task = || {
            if let Some(f) = f.take() {
                output = Some(f());
            }
        };
        let mut task: &mut dyn FnMut() = &mut task;

        let hook = unsafe { SetWindowsHookExW(WH_CALLWNDPROC, Some(call_wnd_proc), 0, owner) };
        if hook == 0 {
            return Err(io::Error::last_os_error().into());
        }

        unsafe {
            SendMessageW(
                hwnd,
                message,
                0,
                &mut task as *mut &mut dyn FnMut() as LPARAM,
            );
            UnhookWindowsHookEx(hook);
        }
    }

    output.ok_or(ScreenError::DispatchFailed)
}

unsafe extern "system" fn call_wnd_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        let message = &*(lparam as *const CWPSTRUCT);
        if message.message == *INVOKE_MESSAGE && message.lParam != 0 {
            let task = &mut *(message.lParam as *mut &mut dyn FnMut());
            task();
        }
    }

    CallNextHookEx(0, code, wparam, lparam)
}

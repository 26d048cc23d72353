use windows_sys::Win32::{
    Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        DefWindowProcA, LoadCursorW, PostQuitMessage, RegisterClassA, UnregisterClassA,
        IDC_ARROW, WM_DESTROY, WNDCLASSA,
    },
};

use crate::window_error::{WindowError, WindowResult};

/// The class name is fixed, so only one class (and one window) can exist per process
pub(crate) const CLASS_NAME: &[u8] = b"pane_window_class\0";

unsafe extern "system" fn process_message(
    hwnd: HWND,
    msg: u32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    match msg {
        WM_DESTROY => {
            PostQuitMessage(0);
            0
        }
        _ => DefWindowProcA(hwnd, msg, w_param, l_param),
    }
}

/// Registered window class. Unregistered on drop
pub(crate) struct WindowClass {
    instance: HINSTANCE,
}

impl WindowClass {
    pub fn register(instance: HINSTANCE) -> WindowResult<Self> {
        let wc = WNDCLASSA {
            lpfnWndProc: Some(process_message),
            hInstance: instance,
            lpszClassName: CLASS_NAME.as_ptr(),
            hCursor: unsafe { LoadCursorW(0, IDC_ARROW) },
            ..unsafe { std::mem::zeroed() }
        };

        if unsafe { RegisterClassA(&wc) } == 0 {
            let code = unsafe { GetLastError() };
            log::error!("RegisterClassA failed with error code {code}");
            return Err(WindowError::ClassRegistrationFailed);
        }

        Ok(Self { instance })
    }

    pub fn instance(&self) -> HINSTANCE {
        self.instance
    }

    pub fn name(&self) -> *const u8 {
        CLASS_NAME.as_ptr()
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        if unsafe { UnregisterClassA(CLASS_NAME.as_ptr(), self.instance) } == 0 {
            let code = unsafe { GetLastError() };
            log::warn!("UnregisterClassA failed with error code {code}");
        }
    }
}

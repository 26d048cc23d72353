use std::ffi::CString;

use nalgebra_glm::UVec2;
use windows_sys::Win32::{
    Foundation::HWND,
    System::LibraryLoader::GetModuleHandleA,
    UI::WindowsAndMessaging::{
        CreateWindowExA, DestroyWindow, DispatchMessageA, IsWindow, PeekMessageA, ShowWindow,
        TranslateMessage, CW_USEDEFAULT, MSG, PM_REMOVE, SW_SHOWNORMAL, WM_QUIT,
    },
};

use crate::{
    platform_window::PlatformWindow,
    window::OpenState,
    window_error::{WindowError, WindowResult},
    WindowCreateInfo,
};

use super::{
    window_class::WindowClass,
    window_style::{frame_margins, outer_size, window_style},
};

pub struct Win32Window {
    pub(crate) hwnd: HWND,
    pub(crate) class: WindowClass,
    pub(crate) size: UVec2,
    pub(crate) title: String,
    pub(crate) state: OpenState,
}

impl PlatformWindow for Win32Window {
    fn new(create_info: &WindowCreateInfo) -> WindowResult<Self>
    where
        Self: Sized,
    {
        let style = window_style(create_info.resizable);
        let size = outer_size(create_info.size, frame_margins(style))?;

        let title =
            CString::new(create_info.title.as_str()).map_err(|_| WindowError::InvalidTitle)?;

        let instance = unsafe { GetModuleHandleA(std::ptr::null()) };
        let class = WindowClass::register(instance)?;

        let hwnd = unsafe {
            CreateWindowExA(
                0,
                class.name(),
                title.as_ptr().cast(),
                style,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                size.x,
                size.y,
                0,
                0,
                class.instance(),
                std::ptr::null(),
            )
        };

        if hwnd == 0 {
            return Err(WindowError::WindowConstructionFailed);
        }

        unsafe { ShowWindow(hwnd, SW_SHOWNORMAL) };

        Ok(Self {
            hwnd,
            class,
            size: create_info.size,
            title: create_info.title.clone(),
            state: OpenState::new(),
        })
    }

    fn size(&self) -> UVec2 {
        self.size
    }

    fn raw_handle(&self) -> u64 {
        self.hwnd as u64
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn process_events(&mut self) {
        let mut msg: MSG = unsafe { std::mem::zeroed() };

        while unsafe { PeekMessageA(&mut msg, 0, 0, 0, PM_REMOVE) } != 0 {
            if msg.message == WM_QUIT {
                log::debug!("Close requested for window {:#x}", self.hwnd);
                self.state.close();
            } else {
                unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageA(&msg);
                }
            }
        }
    }

    fn close_requested(&self) -> bool {
        !self.state.is_open()
    }

    #[cfg(feature = "vulkan")]
    fn create_surface(
        &self,
        entry: &ash::Entry,
        instance: &ash::Instance,
    ) -> WindowResult<ash::vk::SurfaceKHR> {
        use ash::vk;

        crate::vulkan::create_win32_surface(
            entry,
            instance,
            self.class.instance() as vk::HINSTANCE,
            self.hwnd as vk::HWND,
        )
    }
}

impl Drop for Win32Window {
    fn drop(&mut self) {
        // A close through the system menu already destroyed the window in the
        // default window procedure
        if unsafe { IsWindow(self.hwnd) } != 0 && unsafe { DestroyWindow(self.hwnd) } == 0 {
            log::warn!("Failed to destroy window {:#x}", self.hwnd);
        }

        // WM_DESTROY posted a quit message. Take it off the queue so a window
        // created later on this thread doesn't start out closed
        let mut msg: MSG = unsafe { std::mem::zeroed() };
        unsafe { PeekMessageA(&mut msg, 0, WM_QUIT, WM_QUIT, PM_REMOVE) };

        log::debug!("Destroyed window {:#x}", self.hwnd);
    }
}

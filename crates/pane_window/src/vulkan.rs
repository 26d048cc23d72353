use std::ffi::CStr;

use ash::vk;

use crate::window_error::WindowResult;

#[cfg(target_os = "linux")]
const PLATFORM_EXTENSIONS: &[&CStr] = &[vk::KHR_SURFACE_NAME, vk::KHR_XCB_SURFACE_NAME];

#[cfg(target_os = "windows")]
const PLATFORM_EXTENSIONS: &[&CStr] = &[vk::KHR_SURFACE_NAME, vk::KHR_WIN32_SURFACE_NAME];

/// Instance extensions needed by [crate::Window::create_surface] on this platform
pub fn required_instance_extensions() -> &'static [&'static CStr] {
    PLATFORM_EXTENSIONS
}

#[cfg(target_os = "linux")]
pub(crate) fn create_xcb_surface(
    entry: &ash::Entry,
    instance: &ash::Instance,
    connection: *mut vk::xcb_connection_t,
    window: vk::xcb_window_t,
) -> WindowResult<vk::SurfaceKHR> {
    let surface_loader = ash::khr::xcb_surface::Instance::new(entry, instance);

    let create_info = vk::XcbSurfaceCreateInfoKHR::default()
        .connection(connection)
        .window(window);

    let surface = unsafe { surface_loader.create_xcb_surface(&create_info, None) }?;

    Ok(surface)
}

#[cfg(target_os = "windows")]
pub(crate) fn create_win32_surface(
    entry: &ash::Entry,
    instance: &ash::Instance,
    hinstance: vk::HINSTANCE,
    hwnd: vk::HWND,
) -> WindowResult<vk::SurfaceKHR> {
    let surface_loader = ash::khr::win32_surface::Instance::new(entry, instance);

    let create_info = vk::Win32SurfaceCreateInfoKHR::default()
        .hinstance(hinstance)
        .hwnd(hwnd);

    let surface = unsafe { surface_loader.create_win32_surface(&create_info, None) }?;

    Ok(surface)
}

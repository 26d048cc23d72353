//! Minimal native window for applications that own their render loop.
//!
//! Creates one top-level window on X11 (through XCB) or on Windows (Win32), reports
//! when the user asks to close it and, with the `vulkan` feature, builds a
//! Vulkan surface bound to it.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(feature = "vulkan")]
mod vulkan;

mod platform_window;
mod window;
mod window_config;
mod window_create_info;

pub mod window_error;

#[cfg(feature = "vulkan")]
pub use vulkan::required_instance_extensions;
pub use window::Window;
pub use window_config::WindowConfig;
pub use window_create_info::WindowCreateInfo;
pub use window_error::{WindowError, WindowResult};

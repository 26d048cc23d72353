use nalgebra_glm::UVec2;

use crate::{window_error::WindowResult, WindowCreateInfo};

pub trait PlatformWindow {
    /// Creates, maps and shows the native window
    fn new(create_info: &WindowCreateInfo) -> WindowResult<Self>
    where
        Self: Sized;

    /// Returns the client area size requested at creation
    fn size(&self) -> UVec2;
    fn raw_handle(&self) -> u64;
    fn title(&self) -> &str;

    /// Drains every pending event without blocking.
    /// Must return promptly when the queue is empty
    fn process_events(&mut self);

    fn close_requested(&self) -> bool;

    #[cfg(feature = "vulkan")]
    fn create_surface(
        &self,
        entry: &ash::Entry,
        instance: &ash::Instance,
    ) -> WindowResult<ash::vk::SurfaceKHR>;
}

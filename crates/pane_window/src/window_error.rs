use thiserror::Error;

pub type WindowResult<T> = Result<T, WindowError>;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Cannot connect to the display server: {0}")]
    ConnectionUnavailable(String),
    #[error("Failed to register the window class")]
    ClassRegistrationFailed,
    #[error("The platform refused to create the window")]
    WindowConstructionFailed,
    #[cfg(feature = "vulkan")]
    #[error("Failed to create a Vulkan surface: {0}")]
    SurfaceConstructionFailed(ash::vk::Result),
    #[error("Invalid window size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Window title must not contain a nul byte")]
    InvalidTitle,
    #[error("The underlying display server disconnected")]
    LostConnection,
    #[error("There was a problem with protocol `{protocol}`: {reason}")]
    ProtocolError {
        protocol: &'static str,
        reason: &'static str,
    },
}

#[cfg(feature = "vulkan")]
impl From<ash::vk::Result> for WindowError {
    fn from(value: ash::vk::Result) -> Self {
        WindowError::SurfaceConstructionFailed(value)
    }
}

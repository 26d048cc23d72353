use std::marker::PhantomData;

use nalgebra_glm::UVec2;

use crate::{platform_window::PlatformWindow, window_error::WindowResult, WindowCreateInfo};

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "linux", feature = "x11"))] {
        type NativeWindow = crate::linux::x11::x11_window::X11Window;
    } else if #[cfg(target_os = "windows")] {
        type NativeWindow = crate::windows::win32_window::Win32Window;
    } else {
        compile_error!("pane_window supports X11 on Linux (feature `x11`) and Win32 on Windows only");
    }
}

/// Open/closed state of a window. Goes from open to closed once and stays there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenState {
    open: bool,
}

impl OpenState {
    pub fn new() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A single top-level native window.
///
/// The window is visible as soon as it's created. The host drives it by calling
/// [Window::poll_events] once per frame and stops when [Window::is_open] returns `false`:
///
/// ```no_run
/// use pane_window::Window;
///
/// let mut window = Window::create(800, 600, "Window", true)?;
///
/// while window.is_open() {
///     // Do graphics stuff.
///     window.poll_events();
/// }
///
/// window.destroy();
/// # Ok::<(), pane_window::window_error::WindowError>(())
/// ```
///
/// All calls must come from the thread that created the window.
pub struct Window {
    inner: NativeWindow,
    _not_send: PhantomData<*const ()>,
}

impl Window {
    pub fn new(create_info: &WindowCreateInfo) -> WindowResult<Self> {
        create_info.validate()?;

        let inner = NativeWindow::new(create_info)?;

        log::debug!(
            "Created window `{}` ({}x{}, raw handle {:#x})",
            inner.title(),
            create_info.size.x,
            create_info.size.y,
            inner.raw_handle()
        );

        Ok(Self {
            inner,
            _not_send: PhantomData,
        })
    }

    pub fn create(width: u32, height: u32, title: &str, resizable: bool) -> WindowResult<Self> {
        Self::new(&WindowCreateInfo {
            size: [width, height].into(),
            title: title.to_string(),
            resizable,
            display: None,
        })
    }

    /// Destroys the native window and releases everything the window owns.
    /// Same as dropping it
    pub fn destroy(self) {
        drop(self)
    }

    /// Returns `false` once a close request has been seen by [Window::poll_events].
    /// Does not look at the event queue itself
    pub fn is_open(&self) -> bool {
        !self.inner.close_requested()
    }

    /// Drains all pending events without blocking
    pub fn poll_events(&mut self) {
        self.inner.process_events();
    }

    pub fn size(&self) -> UVec2 {
        self.inner.size()
    }

    pub fn title(&self) -> &str {
        self.inner.title()
    }

    /// X11 window id or `HWND`
    pub fn raw_handle(&self) -> u64 {
        self.inner.raw_handle()
    }

    /// Creates a Vulkan surface for this window.
    ///
    /// `instance` must have the extensions from [crate::required_instance_extensions]
    /// enabled. The surface belongs to the caller and has to be destroyed before the window
    #[cfg(feature = "vulkan")]
    pub fn create_surface(
        &self,
        entry: &ash::Entry,
        instance: &ash::Instance,
    ) -> WindowResult<ash::vk::SurfaceKHR> {
        self.inner.create_surface(entry, instance)
    }
}

#[cfg(test)]
mod test {
    use super::OpenState;

    #[test]
    fn should_start_open() {
        assert!(OpenState::new().is_open());
    }

    #[test]
    fn should_stay_closed() {
        let mut state = OpenState::new();

        state.close();
        assert!(!state.is_open());

        state.close();
        assert!(!state.is_open());
        assert_eq!(state, OpenState { open: false });
    }
}

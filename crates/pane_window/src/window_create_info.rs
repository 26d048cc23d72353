use nalgebra_glm::UVec2;

use crate::window_error::{WindowError, WindowResult};

/// Window create info
///
/// The size is the client area, i.e. the region a renderer draws into. Borders and
/// title bar added by the platform are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowCreateInfo {
    /// Client area size in pixels. Both components must be positive
    pub size: UVec2,
    pub title: String,
    /// When `false` the window manager is asked to pin the window to [size](WindowCreateInfo::size)
    pub resizable: bool,
    /// X display to connect to, e.g. `":1"`. `None` uses `$DISPLAY`.
    /// Ignored on Windows
    pub display: Option<String>,
}

impl WindowCreateInfo {
    pub fn resizable_window(title: String, size: UVec2) -> Self {
        Self {
            size,
            title,
            resizable: true,
            display: None,
        }
    }

    pub fn fixed_window(title: String, size: UVec2) -> Self {
        Self {
            resizable: false,
            ..Self::resizable_window(title, size)
        }
    }

    pub fn with_display(self, display: impl Into<String>) -> Self {
        Self {
            display: Some(display.into()),
            ..self
        }
    }

    pub(crate) fn validate(&self) -> WindowResult<()> {
        if self.size.x == 0 || self.size.y == 0 {
            return Err(WindowError::InvalidSize {
                width: self.size.x,
                height: self.size.y,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use nalgebra_glm::UVec2;

    use crate::window_error::WindowError;

    use super::WindowCreateInfo;

    #[test]
    fn should_build_fixed_window() {
        let info = WindowCreateInfo::fixed_window("X".into(), [640, 480].into());

        assert!(!info.resizable);
        assert_eq!(info.size, UVec2::new(640, 480));
        assert_eq!(info.display, None);
    }

    #[test]
    fn should_override_display() {
        let info =
            WindowCreateInfo::resizable_window("Window".into(), [800, 600].into()).with_display(":3");

        assert!(info.resizable);
        assert_eq!(info.display.as_deref(), Some(":3"));
    }

    #[test]
    fn should_reject_zero_size() {
        let info = WindowCreateInfo::resizable_window("Window".into(), [0, 600].into());

        assert!(matches!(
            info.validate(),
            Err(WindowError::InvalidSize {
                width: 0,
                height: 600
            })
        ));
    }

    #[test]
    fn should_accept_positive_size() {
        let info = WindowCreateInfo::fixed_window("Window".into(), [1, 1].into());

        assert!(info.validate().is_ok());
    }
}

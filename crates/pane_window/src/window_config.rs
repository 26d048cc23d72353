use pane_config::ConfigSection;
use serde::Deserialize;

use crate::WindowCreateInfo;

/// `[window]` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub resizable: bool,
    pub display: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("Window"),
            resizable: true,
            display: None,
        }
    }
}

impl ConfigSection for WindowConfig {
    fn section_name() -> &'static str {
        "window"
    }
}

impl From<WindowConfig> for WindowCreateInfo {
    fn from(config: WindowConfig) -> Self {
        Self {
            size: [config.width, config.height].into(),
            title: config.title,
            resizable: config.resizable,
            display: config.display,
        }
    }
}

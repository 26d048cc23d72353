use std::{thread, time::Duration};

use anyhow::{Context, Result};
use pane_config::get_config;
use pane_window::{Window, WindowConfig, WindowCreateInfo};

const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = get_config();
    log::debug!(
        "Config sections: {:?}",
        config.table().keys().collect::<Vec<_>>()
    );

    let config = config
        .section::<WindowConfig>()
        .context("Invalid `[window]` config section")?;
    let mut window =
        Window::new(&WindowCreateInfo::from(config)).context("Failed to create window")?;

    #[cfg(feature = "vulkan")]
    vulkan::create_and_destroy_surface(&window)?;

    log::info!(
        "Window `{}` ({}x{}) is open, close it to exit",
        window.title(),
        window.size().x,
        window.size().y
    );

    let mut frames = 0u64;
    while window.is_open() {
        // Do graphics stuff.
        window.poll_events();
        frames += 1;
        thread::sleep(FRAME_TIME);
    }

    log::info!("Close requested after {frames} frames");
    window.destroy();

    Ok(())
}

#[cfg(feature = "vulkan")]
mod vulkan {
    use anyhow::{Context, Result};
    use ash::vk;
    use pane_window::{required_instance_extensions, Window};

    pub fn create_and_destroy_surface(window: &Window) -> Result<()> {
        let entry = unsafe { ash::Entry::load() }.context("Failed to load Vulkan")?;

        let extensions = required_instance_extensions()
            .iter()
            .map(|ext| ext.as_ptr())
            .collect::<Vec<_>>();

        let application_info = vk::ApplicationInfo::default().api_version(vk::API_VERSION_1_0);
        let create_info = vk::InstanceCreateInfo::default()
            .application_info(&application_info)
            .enabled_extension_names(&extensions);

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .context("Failed to create a Vulkan instance")?;

        let result = window.create_surface(&entry, &instance);

        if let Ok(surface) = result {
            log::info!("Created Vulkan surface {surface:?}");
            let surface_loader = ash::khr::surface::Instance::new(&entry, &instance);
            unsafe { surface_loader.destroy_surface(surface, None) };
        }

        unsafe { instance.destroy_instance(None) };

        result.map(|_| ()).context("Failed to create a Vulkan surface")
    }
}

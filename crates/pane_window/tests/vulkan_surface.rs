#![cfg(feature = "vulkan")]

use ash::vk;
use pane_window::{required_instance_extensions, Window, WindowError};

fn create_instance(entry: &ash::Entry) -> Option<ash::Instance> {
    let extensions = required_instance_extensions()
        .iter()
        .map(|ext| ext.as_ptr())
        .collect::<Vec<_>>();

    let application_info = vk::ApplicationInfo::default().api_version(vk::API_VERSION_1_0);
    let create_info = vk::InstanceCreateInfo::default()
        .application_info(&application_info)
        .enabled_extension_names(&extensions);

    match unsafe { entry.create_instance(&create_info, None) } {
        Ok(instance) => Some(instance),
        Err(err) => {
            eprintln!("Skipping: cannot create a Vulkan instance with surface extensions ({err})");
            None
        }
    }
}

#[test]
fn should_create_surface_for_window() {
    let _ = env_logger::builder().is_test(true).try_init();

    let entry = match unsafe { ash::Entry::load() } {
        Ok(entry) => entry,
        Err(err) => {
            eprintln!("Skipping: no Vulkan loader ({err})");
            return;
        }
    };

    let window = match Window::create(800, 600, "Window", true) {
        Ok(window) => window,
        Err(WindowError::ConnectionUnavailable(reason)) => {
            eprintln!("Skipping: no display server available ({reason})");
            return;
        }
        Err(err) => panic!("Failed to create window: {err}"),
    };

    let Some(instance) = create_instance(&entry) else {
        return;
    };

    let surface = window.create_surface(&entry, &instance).unwrap();
    assert_ne!(surface, vk::SurfaceKHR::null());

    let surface_loader = ash::khr::surface::Instance::new(&entry, &instance);
    unsafe { surface_loader.destroy_surface(surface, None) };

    window.destroy();
    unsafe { instance.destroy_instance(None) };
}

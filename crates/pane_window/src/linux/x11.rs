pub mod size_hints;
pub mod x11_window;

mod x11_error;
mod x11_event;

pub mod win32_window;

mod window_class;
mod window_style;

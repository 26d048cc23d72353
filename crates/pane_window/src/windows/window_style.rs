use nalgebra_glm::{IVec2, UVec2};
use windows_sys::Win32::{
    Foundation::RECT,
    UI::WindowsAndMessaging::{
        AdjustWindowRectEx, WINDOW_STYLE, WS_CAPTION, WS_MAXIMIZEBOX, WS_MINIMIZEBOX,
        WS_OVERLAPPED, WS_SYSMENU, WS_THICKFRAME,
    },
};

use crate::window_error::{WindowError, WindowResult};

pub(crate) fn window_style(resizable: bool) -> WINDOW_STYLE {
    let style = WS_OVERLAPPED | WS_SYSMENU | WS_CAPTION | WS_MINIMIZEBOX;

    if resizable {
        style | WS_MAXIMIZEBOX | WS_THICKFRAME
    } else {
        style
    }
}

/// Width and height the frame adds around the client area for `style`
pub(crate) fn frame_margins(style: WINDOW_STYLE) -> IVec2 {
    let mut border_rect = RECT {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    if unsafe { AdjustWindowRectEx(&mut border_rect, style, 0, 0) } == 0 {
        log::warn!("AdjustWindowRectEx failed, the client area will be smaller than requested");
    }

    IVec2::new(
        border_rect.right - border_rect.left,
        border_rect.bottom - border_rect.top,
    )
}

/// Outer window size whose client area is `client_size`. Fails when the outer size
/// doesn't fit the `i32` Win32 takes
pub(crate) fn outer_size(client_size: UVec2, margins: IVec2) -> WindowResult<IVec2> {
    let extend = |client: u32, margin: i32| {
        i32::try_from(client)
            .ok()
            .and_then(|client| client.checked_add(margin))
    };

    match (
        extend(client_size.x, margins.x),
        extend(client_size.y, margins.y),
    ) {
        (Some(width), Some(height)) => Ok(IVec2::new(width, height)),
        _ => Err(WindowError::InvalidSize {
            width: client_size.x,
            height: client_size.y,
        }),
    }
}

use bitflags::bitflags;

bitflags! {
    /// `WM_SIZE_HINTS.flags` bits, ICCCM 4.1.2.3
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SizeHintsFlags: u32 {
        const US_POSITION = 1 << 0;
        const US_SIZE = 1 << 1;
        const P_POSITION = 1 << 2;
        const P_SIZE = 1 << 3;
        const P_MIN_SIZE = 1 << 4;
        const P_MAX_SIZE = 1 << 5;
        const P_RESIZE_INC = 1 << 6;
        const P_ASPECT = 1 << 7;
        const P_BASE_SIZE = 1 << 8;
        const P_WIN_GRAVITY = 1 << 9;
    }
}

/// `StaticGravity` from the core protocol
pub const WIN_GRAVITY_STATIC: u32 = 10;

/// Number of 32-bit words in a `WM_SIZE_HINTS` property
pub const SIZE_HINTS_LEN: usize = 18;

/// Payload of the `WM_NORMAL_HINTS` property
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeHints {
    pub flags: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub width_inc: i32,
    pub height_inc: i32,
    pub min_aspect_num: i32,
    pub min_aspect_den: i32,
    pub max_aspect_num: i32,
    pub max_aspect_den: i32,
    pub base_width: i32,
    pub base_height: i32,
    pub win_gravity: u32,
}

impl SizeHints {
    /// Hints that pin the window to `width`x`height`.
    ///
    /// Only min/max size and gravity are set. Base size and resize increments stay
    /// unset, min == max is what window managers look at.
    pub fn fixed_size(width: u32, height: u32) -> Self {
        let flags =
            SizeHintsFlags::P_MIN_SIZE | SizeHintsFlags::P_MAX_SIZE | SizeHintsFlags::P_WIN_GRAVITY;

        Self {
            flags: flags.bits(),
            min_width: width as i32,
            min_height: height as i32,
            max_width: width as i32,
            max_height: height as i32,
            win_gravity: WIN_GRAVITY_STATIC,
            ..Default::default()
        }
    }

    pub fn to_prop_data(&self) -> [u32; SIZE_HINTS_LEN] {
        [
            self.flags,
            self.x as u32,
            self.y as u32,
            self.width as u32,
            self.height as u32,
            self.min_width as u32,
            self.min_height as u32,
            self.max_width as u32,
            self.max_height as u32,
            self.width_inc as u32,
            self.height_inc as u32,
            self.min_aspect_num as u32,
            self.min_aspect_den as u32,
            self.max_aspect_num as u32,
            self.max_aspect_den as u32,
            self.base_width as u32,
            self.base_height as u32,
            self.win_gravity,
        ]
    }
}

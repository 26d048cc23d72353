use nalgebra_glm::UVec2;
use xcb::{x, Xid};

use crate::{
    platform_window::PlatformWindow,
    window::OpenState,
    window_error::{WindowError, WindowResult},
    WindowCreateInfo,
};

use super::{
    size_hints::SizeHints,
    x11_event::{X11WindowEvent, X11WindowEventConvertError},
};

xcb::atoms_struct! {
    #[derive(Clone, Copy, Debug)]
    pub(crate) struct Atoms {
        pub delete_window => b"WM_DELETE_WINDOW" only_if_exists = false,
        pub wm_protocols => b"WM_PROTOCOLS" only_if_exists = false,
    }
}

/// Window backed by its own XCB connection. Dropping it destroys the window and
/// closes the connection
pub struct X11Window {
    pub(crate) conn: xcb::Connection,
    pub(crate) screen_num: i32,
    pub(crate) id: x::Window,
    pub(crate) atoms: Atoms,
    pub(crate) size: UVec2,
    pub(crate) title: String,
    pub(crate) state: OpenState,
}

impl X11Window {
    /// Sends every request that sets the window up and waits for all of them to succeed.
    /// The window is then mapped without waiting for a reply
    fn setup_window(
        conn: &xcb::Connection,
        screen_num: i32,
        window: x::Window,
        width: u16,
        height: u16,
        create_info: &WindowCreateInfo,
    ) -> WindowResult<Atoms> {
        let setup = conn.get_setup();
        let screen = setup
            .roots()
            .nth(screen_num as usize)
            .ok_or_else(|| {
                WindowError::ConnectionUnavailable(format!("Screen {screen_num} does not exist"))
            })?;

        let create_cookie = conn.send_request_checked(&x::CreateWindow {
            depth: x::COPY_FROM_PARENT as u8,
            wid: window,
            parent: screen.root(),
            x: 0,
            y: 0,
            width,
            height,
            border_width: 0,
            class: x::WindowClass::InputOutput,
            visual: screen.root_visual(),
            value_list: &[
                x::Cw::BackPixel(screen.black_pixel()),
                x::Cw::EventMask(x::EventMask::empty()),
            ],
        });

        let rename_cookie = conn.send_request_checked(&x::ChangeProperty {
            mode: x::PropMode::Replace,
            window,
            property: x::ATOM_WM_NAME,
            r#type: x::ATOM_STRING,
            data: create_info.title.as_bytes(),
        });

        let size_hints_cookie = if create_info.resizable {
            None
        } else {
            let hints = SizeHints::fixed_size(width as u32, height as u32);

            Some(conn.send_request_checked(&x::ChangeProperty {
                mode: x::PropMode::Replace,
                window,
                property: x::ATOM_WM_NORMAL_HINTS,
                r#type: x::ATOM_WM_SIZE_HINTS,
                data: &hints.to_prop_data(),
            }))
        };

        let atoms = Atoms::intern_all(conn)?;

        let window_delete_cookie = conn.send_request_checked(&x::ChangeProperty {
            mode: x::PropMode::Replace,
            window,
            property: atoms.wm_protocols,
            r#type: x::ATOM_ATOM,
            data: &[atoms.delete_window],
        });

        conn.check_request(create_cookie)?;
        conn.check_request(rename_cookie)?;
        if let Some(cookie) = size_hints_cookie {
            conn.check_request(cookie)?;
        }
        conn.check_request(window_delete_cookie)?;

        conn.send_request(&x::MapWindow { window });
        conn.flush()?;

        Ok(atoms)
    }
}

impl PlatformWindow for X11Window {
    fn new(create_info: &WindowCreateInfo) -> WindowResult<Self>
    where
        Self: Sized,
    {
        let invalid_size = || WindowError::InvalidSize {
            width: create_info.size.x,
            height: create_info.size.y,
        };
        let width = u16::try_from(create_info.size.x).map_err(|_| invalid_size())?;
        let height = u16::try_from(create_info.size.y).map_err(|_| invalid_size())?;

        let (conn, screen_num) = xcb::Connection::connect(create_info.display.as_deref())
            .map_err(|err| WindowError::ConnectionUnavailable(err.to_string()))?;

        let id: x::Window = conn.generate_id();

        let atoms = match Self::setup_window(&conn, screen_num, id, width, height, create_info) {
            Ok(atoms) => atoms,
            Err(err) => {
                conn.send_request(&x::DestroyWindow { window: id });
                let _ = conn.flush();
                return Err(err);
            }
        };

        log::debug!(
            "X11 window {:#x} mapped on screen {screen_num}, WM_DELETE_WINDOW = {}",
            id.resource_id(),
            atoms.delete_window.resource_id()
        );

        Ok(Self {
            conn,
            screen_num,
            id,
            atoms,
            size: create_info.size,
            title: create_info.title.clone(),
            state: OpenState::new(),
        })
    }

    fn size(&self) -> UVec2 {
        self.size
    }

    fn raw_handle(&self) -> u64 {
        self.id.resource_id() as u64
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn process_events(&mut self) {
        loop {
            let xcb_event = match self.conn.poll_for_event() {
                Ok(Some(event)) => event,
                Ok(None) => break,
                Err(xcb::Error::Protocol(err)) => {
                    log::warn!("X11 protocol error: {err:?}");
                    continue;
                }
                Err(xcb::Error::Connection(err)) => {
                    log::error!("Lost connection to the X server: {err}");
                    break;
                }
            };

            match X11WindowEvent::try_from(xcb_event) {
                Ok(ev) if ev.is_delete_request(self.id, self.atoms.delete_window) => {
                    log::debug!("Close requested for X11 window {:#x}", self.id.resource_id());
                    self.state.close();
                }
                Ok(ev) => log::trace!("Ignored client message: {ev:?}"),
                Err(X11WindowEventConvertError::UnsupportedX11Event(ev)) => {
                    log::trace!("Unhandled X11 event: {ev:?}")
                }
            }
        }
    }

    fn close_requested(&self) -> bool {
        !self.state.is_open()
    }

    #[cfg(feature = "vulkan")]
    fn create_surface(
        &self,
        entry: &ash::Entry,
        instance: &ash::Instance,
    ) -> WindowResult<ash::vk::SurfaceKHR> {
        crate::vulkan::create_xcb_surface(
            entry,
            instance,
            self.conn.get_raw_conn().cast(),
            self.id.resource_id(),
        )
    }
}

impl Drop for X11Window {
    fn drop(&mut self) {
        let result = self
            .conn
            .check_request(self.conn.send_request_checked(&x::DestroyWindow { window: self.id }));

        if let Err(err) = result {
            log::warn!("Failed to destroy X11 window {:#x}: {err}", self.id.resource_id());
        }

        log::debug!(
            "Destroyed X11 window {:#x}, disconnecting from screen {}",
            self.id.resource_id(),
            self.screen_num
        );
    }
}

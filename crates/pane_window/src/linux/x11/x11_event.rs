use thiserror::Error;
use xcb::{x, Xid};

/// The X11 events the window reacts to.
///
/// The window subscribes to no event classes, so client messages are the only
/// events the server sends it. Synthetic events (sent with `SendEvent`) are
/// classified the same way as real ones.
#[derive(Clone, Debug)]
pub enum X11WindowEvent {
    ClientMessage {
        window: x::Window,
        data: x::ClientMessageData,
    },
}

impl X11WindowEvent {
    /// `WM_PROTOCOLS` client message for `target` carrying `WM_DELETE_WINDOW` in its
    /// first slot
    pub fn is_delete_request(&self, target: x::Window, delete_window: x::Atom) -> bool {
        match self {
            X11WindowEvent::ClientMessage {
                window,
                data: x::ClientMessageData::Data32([atom, ..]),
            } => *window == target && *atom == delete_window.resource_id(),
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum X11WindowEventConvertError {
    #[error("Not a supported X11 event ({0:?})")]
    UnsupportedX11Event(xcb::Event),
}

impl TryFrom<xcb::Event> for X11WindowEvent {
    type Error = X11WindowEventConvertError;

    fn try_from(xcb_event: xcb::Event) -> Result<Self, Self::Error> {
        match xcb_event {
            xcb::Event::X(x::Event::ClientMessage(ref ev)) => Ok(Self::ClientMessage {
                window: ev.window(),
                data: ev.data(),
            }),
            _ => Err(Self::Error::UnsupportedX11Event(xcb_event)),
        }
    }
}

#[cfg(test)]
mod test {
    use xcb::{x, XidNew};

    use super::{X11WindowEvent, X11WindowEventConvertError};

    fn atom(id: u32) -> x::Atom {
        x::Atom::new(id)
    }

    fn window(id: u32) -> x::Window {
        x::Window::new(id)
    }

    const TARGET: u32 = 0x200001;

    fn client_message(data: x::ClientMessageData) -> xcb::Event {
        let ev = x::ClientMessageEvent::new(window(TARGET), atom(300), data);
        xcb::Event::X(x::Event::ClientMessage(ev))
    }

    #[test]
    fn should_detect_delete_request() {
        let event = client_message(x::ClientMessageData::Data32([301, 0, 0, 0, 0]));
        let event = X11WindowEvent::try_from(event).unwrap();

        assert!(event.is_delete_request(window(TARGET), atom(301)));
    }

    #[test]
    fn should_ignore_other_protocol_messages() {
        let event = client_message(x::ClientMessageData::Data32([302, 0, 0, 0, 0]));
        let event = X11WindowEvent::try_from(event).unwrap();

        assert!(!event.is_delete_request(window(TARGET), atom(301)));
    }

    #[test]
    fn should_ignore_non_32_bit_data() {
        let event = client_message(x::ClientMessageData::Data8([0; 20]));
        let event = X11WindowEvent::try_from(event).unwrap();

        assert!(!event.is_delete_request(window(TARGET), atom(0)));
    }

    #[test]
    fn should_ignore_delete_request_for_other_window() {
        let event = client_message(x::ClientMessageData::Data32([301, 0, 0, 0, 0]));
        let event = X11WindowEvent::try_from(event).unwrap();

        assert!(!event.is_delete_request(window(TARGET + 1), atom(301)));
    }

    #[test]
    fn should_reject_unsupported_events() {
        let ev = x::MapNotifyEvent::new(window(1), window(TARGET), false);
        let result = X11WindowEvent::try_from(xcb::Event::X(x::Event::MapNotify(ev)));

        assert!(matches!(
            result,
            Err(X11WindowEventConvertError::UnsupportedX11Event(_))
        ));
    }
}

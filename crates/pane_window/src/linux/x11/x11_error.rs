use xcb::{ConnError, ProtocolError};

use crate::window_error::WindowError;

impl From<ProtocolError> for WindowError {
    /// Keeps the name of the rejected request, the error code itself goes to the log
    fn from(value: ProtocolError) -> Self {
        #[allow(unreachable_patterns)]
        let (protocol, request) = match &value {
            ProtocolError::X(_, request) => ("X", *request),
            _ => ("extension", None),
        };

        log::error!("X server rejected a request: {value:?}");

        WindowError::ProtocolError {
            protocol,
            reason: request.unwrap_or("unknown request"),
        }
    }
}

impl From<ConnError> for WindowError {
    fn from(value: ConnError) -> Self {
        log::error!("X connection failed: {value}");
        WindowError::LostConnection
    }
}

impl From<xcb::Error> for WindowError {
    fn from(value: xcb::Error) -> Self {
        match value {
            xcb::Error::Connection(err) => err.into(),
            xcb::Error::Protocol(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use xcb::ConnError;

    use crate::window_error::WindowError;

    #[test]
    fn should_map_connection_errors_to_lost_connection() {
        let err = WindowError::from(xcb::Error::Connection(ConnError::ClosedReqLenExceed));

        assert!(matches!(err, WindowError::LostConnection));
    }
}

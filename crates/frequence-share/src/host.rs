use crate::request::ShareRequest;
use thiserror::Error;

/// Synchronous rejection reported by a host while dispatching a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DispatchError {
    message: String,
}

impl DispatchError {
    /// Create a dispatch error from the host's own message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Capability surface and dispatch entry point of a platform share facility.
///
/// Implementations must not panic when the facility is missing; they report
/// it as unsupported instead.
pub trait ShareHost {
    /// Whether the host exposes a file-sharing facility at all.
    fn supports_sharing(&self) -> bool;

    /// Whether the host accepts this particular request (size, type, count).
    fn can_share(&self, request: &ShareRequest) -> bool;

    /// Hand the request to the platform.
    ///
    /// `Ok` means the request was accepted for dispatch. Completion of the
    /// native share interaction is not reported.
    fn dispatch(&self, request: ShareRequest) -> Result<(), DispatchError>;
}

impl<H: ShareHost + ?Sized> ShareHost for &H {
    fn supports_sharing(&self) -> bool {
        (**self).supports_sharing()
    }

    fn can_share(&self, request: &ShareRequest) -> bool {
        (**self).can_share(request)
    }

    fn dispatch(&self, request: ShareRequest) -> Result<(), DispatchError> {
        (**self).dispatch(request)
    }
}

impl<H: ShareHost + ?Sized> ShareHost for Box<H> {
    fn supports_sharing(&self) -> bool {
        (**self).supports_sharing()
    }

    fn can_share(&self, request: &ShareRequest) -> bool {
        (**self).can_share(request)
    }

    fn dispatch(&self, request: ShareRequest) -> Result<(), DispatchError> {
        (**self).dispatch(request)
    }
}

/// A host without any share facility (CLI, server, headless test runner).
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessHost;

impl ShareHost for HeadlessHost {
    fn supports_sharing(&self) -> bool {
        false
    }

    fn can_share(&self, _request: &ShareRequest) -> bool {
        false
    }

    fn dispatch(&self, _request: ShareRequest) -> Result<(), DispatchError> {
        Err(DispatchError::new("no share facility on this host"))
    }
}

use crate::host::DispatchError;
use thiserror::Error;

/// Errors that can end a share attempt.
///
/// The display strings are the user-facing messages carried by
/// [`ShareResult::Failure`](crate::ShareResult::Failure).
#[derive(Debug, Error)]
pub enum ShareError {
    /// The image data is not valid base64.
    #[error("Erreur: image base64 invalide ({0})")]
    Decode(#[from] base64::DecodeError),

    /// The host cannot share this kind of file.
    #[error("Le navigateur ne supporte pas le partage de fichiers.")]
    Unsupported,

    /// The host rejected the request while dispatching it.
    #[error("Erreur: {0}")]
    Dispatch(#[from] DispatchError),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for frequence-share operations.
pub type Result<T> = std::result::Result<T, ShareError>;

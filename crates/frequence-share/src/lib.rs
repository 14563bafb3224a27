//! # frequence-share
//!
//! One-shot image sharing through a platform share facility.
//!
//! This crate provides:
//! - Capability probing against an abstract [`ShareHost`]
//! - Base64 image decoding with browser `atob` acceptance rules
//! - Shareable artifact construction (`ma_frequence.png`, `image/png`)
//! - A share invoker that negotiates capability, dispatches the request and
//!   reports a typed [`ShareResult`]
//!
//! Dispatch is fire-and-forget: `Success` means the host accepted the request,
//! not that the user finished with the native share sheet. What happens after
//! acceptance is not observable through this crate.
//!
//! ## Example
//!
//! ```ignore
//! use frequence_share::{ShareInvoker, ShareResult};
//!
//! let invoker = ShareInvoker::new(host);
//! if invoker.probe_capability() {
//!     match invoker.share(&png_base64) {
//!         ShareResult::Success => {}
//!         ShareResult::Failure(message) => show_toast(&message),
//!     }
//! }
//! ```

mod artifact;
mod config;
mod decode;
mod error;
mod host;
mod invoker;
mod request;
mod result;

pub use artifact::{ArtifactBuilder, ShareableArtifact, DEFAULT_FILE_NAME, PNG_MEDIA_TYPE};
pub use config::{ShareConfig, DEFAULT_TITLE};
pub use decode::decode_image_base64;
pub use error::{Result, ShareError};
pub use host::{DispatchError, HeadlessHost, ShareHost};
pub use invoker::{probe_capability, share, InvokerState, ShareInvoker};
pub use request::ShareRequest;
pub use result::ShareResult;

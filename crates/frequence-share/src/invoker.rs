use crate::artifact::ArtifactBuilder;
use crate::config::ShareConfig;
use crate::decode::decode_image_base64;
use crate::host::ShareHost;
use crate::request::ShareRequest;
use crate::result::ShareResult;
use crate::{Result, ShareError};
use log::{debug, warn};

/// Progress of a single share attempt.
///
/// `Idle → Checking → Sharing → Resolved`; any failure jumps straight to
/// `Resolved`. There is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokerState<'a> {
    /// Holding the caller's base64 image data.
    Idle(&'a str),
    /// Request assembled, capability not yet confirmed.
    Checking(ShareRequest),
    /// Host accepts the request; about to dispatch.
    Sharing(ShareRequest),
    /// Terminal.
    Resolved(ShareResult),
}

impl InvokerState<'_> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, InvokerState::Resolved(_))
    }
}

/// Shares images through a [`ShareHost`].
///
/// Holds no per-call state: every [`share`](Self::share) builds a fresh
/// request and resolves independently.
#[derive(Debug, Clone)]
pub struct ShareInvoker<H> {
    host: H,
    config: ShareConfig,
}

impl<H: ShareHost> ShareInvoker<H> {
    /// Create an invoker with the default title and file metadata.
    pub fn new(host: H) -> Self {
        Self {
            host,
            config: ShareConfig::default(),
        }
    }

    /// Replace the request metadata.
    pub fn with_config(mut self, config: ShareConfig) -> Self {
        self.config = config;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Report whether the host exposes a file-sharing facility.
    pub fn probe_capability(&self) -> bool {
        let supported = self.host.supports_sharing();
        debug!("share capability probe: supported={}", supported);
        supported
    }

    /// Share a base64-encoded PNG image.
    ///
    /// Returns `Success` once the host accepts the request; the user's
    /// interaction with the share sheet is not awaited.
    pub fn share(&self, image_data: &str) -> ShareResult {
        let mut state = InvokerState::Idle(image_data);
        loop {
            state = match self.advance(state) {
                InvokerState::Resolved(result) => return result,
                next => next,
            };
        }
    }

    /// Perform one transition of the state machine.
    pub fn advance<'a>(&self, state: InvokerState<'a>) -> InvokerState<'a> {
        match state {
            InvokerState::Idle(image_data) => match self.prepare(image_data) {
                Ok(request) => {
                    debug!(
                        "share request prepared: title={:?}, files={}",
                        request.title(),
                        request.files().len()
                    );
                    InvokerState::Checking(request)
                }
                Err(err) => resolve(Err(err)),
            },
            InvokerState::Checking(request) => {
                if self.host.supports_sharing() && self.host.can_share(&request) {
                    InvokerState::Sharing(request)
                } else {
                    resolve(Err(ShareError::Unsupported))
                }
            }
            InvokerState::Sharing(request) => {
                resolve(self.host.dispatch(request).map_err(ShareError::from))
            }
            resolved @ InvokerState::Resolved(_) => resolved,
        }
    }

    fn prepare(&self, image_data: &str) -> Result<ShareRequest> {
        let bytes = decode_image_base64(image_data)?;
        let artifact = ArtifactBuilder::new()
            .with_file_name(self.config.file_name.as_str())
            .with_media_type(self.config.media_type.as_str())
            .with_bytes(bytes)
            .build();
        Ok(ShareRequest::single(self.config.title.as_str(), artifact))
    }
}

fn resolve<'a>(outcome: Result<()>) -> InvokerState<'a> {
    match &outcome {
        Ok(()) => debug!("share request accepted for dispatch"),
        Err(err) => warn!("share failed: {}", err),
    }
    InvokerState::Resolved(outcome.into())
}

/// Report whether `host` exposes a file-sharing facility.
pub fn probe_capability<H: ShareHost>(host: &H) -> bool {
    ShareInvoker::new(host).probe_capability()
}

/// Share a base64-encoded PNG image through `host` with the default metadata.
pub fn share<H: ShareHost>(host: &H, image_data: &str) -> ShareResult {
    ShareInvoker::new(host).share(image_data)
}

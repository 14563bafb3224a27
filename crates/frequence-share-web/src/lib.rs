//! # frequence-share-web
//!
//! Browser binding for `frequence-share`.
//!
//! Exposes two functions to JavaScript:
//! - `can_share()`: whether the browser has a file-sharing facility
//! - `share_image(image_data)`: share a base64 PNG as `ma_frequence.png`
//!
//! `share_image` reports success as soon as `navigator.share` accepts the
//! request. The promise it returns is only logged, never awaited.
//!
//! Log records go through the `log` facade; the embedding page picks the
//! logger.
//!
//! ## Example
//!
//! ```js
//! import init, { can_share, share_image } from "frequence_share_web";
//!
//! await init();
//! if (can_share()) {
//!   const outcome = share_image(pngBase64);
//!   if (!outcome.ok) alert(outcome.message);
//! }
//! ```

mod navigator;

pub use navigator::NavigatorHost;

use frequence_share::ShareResult;
use wasm_bindgen::prelude::*;

/// Result of `share_image`, as seen from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    ok: bool,
    message: Option<String>,
}

#[wasm_bindgen]
impl ShareOutcome {
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.ok
    }

    /// User-facing failure message; `undefined` on success.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

impl From<ShareResult> for ShareOutcome {
    fn from(result: ShareResult) -> Self {
        match result {
            ShareResult::Success => Self {
                ok: true,
                message: None,
            },
            ShareResult::Failure(message) => Self {
                ok: false,
                message: Some(message),
            },
        }
    }
}

/// Whether the browser exposes a file-sharing facility.
#[wasm_bindgen]
pub fn can_share() -> bool {
    install_panic_hook();
    frequence_share::probe_capability(&NavigatorHost::from_window())
}

/// Share a base64-encoded PNG through the browser share sheet.
#[wasm_bindgen]
pub fn share_image(image_data: &str) -> ShareOutcome {
    install_panic_hook();
    frequence_share::share(&NavigatorHost::from_window(), image_data).into()
}

fn install_panic_hook() {
    #[cfg(feature = "panic-hook")]
    console_error_panic_hook::set_once();
}

//! Web Share API host.
//!
//! `navigator.canShare` and `navigator.share` are optional on every browser,
//! so both are looked up at call time instead of through typed bindings.

use frequence_share::{DispatchError, ShareHost, ShareRequest, ShareableArtifact};
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, FilePropertyBag, Navigator};

/// [`ShareHost`] backed by the browser `navigator`.
#[derive(Debug, Clone)]
pub struct NavigatorHost {
    navigator: Option<Navigator>,
}

impl NavigatorHost {
    /// Use the navigator of the current window, if there is one.
    pub fn from_window() -> Self {
        Self {
            navigator: web_sys::window().map(|window| window.navigator()),
        }
    }

    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator: Some(navigator),
        }
    }

    fn method(&self, name: &str) -> Option<(&Navigator, Function)> {
        let navigator = self.navigator.as_ref()?;
        let value = Reflect::get(navigator, &JsValue::from_str(name)).ok()?;
        let method = value.dyn_into::<Function>().ok()?;
        Some((navigator, method))
    }
}

impl ShareHost for NavigatorHost {
    fn supports_sharing(&self) -> bool {
        self.method("canShare").is_some()
    }

    fn can_share(&self, request: &ShareRequest) -> bool {
        let Some((navigator, can_share)) = self.method("canShare") else {
            return false;
        };
        let data = match to_share_data(request) {
            Ok(data) => data,
            Err(err) => {
                warn!("could not build share data: {}", js_message(&err));
                return false;
            }
        };
        can_share
            .call1(navigator, &data)
            .map(|answer| answer.is_truthy())
            .unwrap_or(false)
    }

    fn dispatch(&self, request: ShareRequest) -> Result<(), DispatchError> {
        let (navigator, share) = self
            .method("share")
            .ok_or_else(|| DispatchError::new("navigator.share is not available"))?;
        let data = to_share_data(&request).map_err(|err| DispatchError::new(js_message(&err)))?;
        let pending = share
            .call1(navigator, &data)
            .map_err(|err| DispatchError::new(js_message(&err)))?;
        observe_rejection(pending);
        Ok(())
    }
}

fn to_share_data(request: &ShareRequest) -> Result<Object, JsValue> {
    let files = Array::new();
    for artifact in request.files() {
        let file = to_file(artifact)?;
        files.push(&file);
    }

    let data = Object::new();
    Reflect::set(
        &data,
        &JsValue::from_str("title"),
        &JsValue::from_str(request.title()),
    )?;
    Reflect::set(&data, &JsValue::from_str("files"), &files)?;
    Ok(data)
}

fn to_file(artifact: &ShareableArtifact) -> Result<File, JsValue> {
    let parts = Array::of1(&Uint8Array::from(artifact.bytes()));
    let options = FilePropertyBag::new();
    options.set_type(artifact.media_type());
    options.set_last_modified(artifact.last_modified_millis() as f64);
    File::new_with_u8_array_sequence_and_options(&parts, artifact.file_name(), &options)
}

// The share sheet outcome is never reported to the caller. Await it on a
// detached local task so a late rejection is logged instead of surfacing as
// an unhandled promise rejection.
fn observe_rejection(pending: JsValue) {
    let Ok(promise) = pending.dyn_into::<Promise>() else {
        return;
    };
    spawn_local(async move {
        if let Err(reason) = JsFuture::from(promise).await {
            warn!("share sheet rejected the request: {}", js_message(&reason));
        }
    });
}

fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

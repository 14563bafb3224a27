//! Runs in a headless browser: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use frequence_share::{share, ArtifactBuilder, ShareHost, ShareRequest, ShareResult};
use frequence_share_web::NavigatorHost;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::Navigator;

wasm_bindgen_test_configure!(run_in_browser);

const PNG_SIGNATURE: &str = "iVBORw0KGgo=";

fn fake_navigator(methods: &[(&str, Function)]) -> NavigatorHost {
    let navigator = Object::new();
    for (name, method) in methods {
        Reflect::set(&navigator, &JsValue::from_str(name), method).unwrap();
    }
    NavigatorHost::new(navigator.unchecked_into::<Navigator>())
}

fn returning(body: &str) -> Function {
    Function::new_with_args("data", body)
}

fn png_request() -> ShareRequest {
    let artifact = ArtifactBuilder::new()
        .with_bytes(vec![0x89u8, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
        .build();
    ShareRequest::single("Ma fréquence stationR", artifact)
}

#[wasm_bindgen_test]
fn missing_can_share_is_unsupported() {
    let host = fake_navigator(&[("share", returning("return Promise.resolve();"))]);

    assert!(!host.supports_sharing());
    assert!(!host.can_share(&png_request()));
}

#[wasm_bindgen_test]
fn can_share_receives_title_and_png_file() {
    let host = fake_navigator(&[(
        "canShare",
        returning(
            "return data.title === 'Ma fréquence stationR' \
             && data.files.length === 1 \
             && data.files[0].name === 'ma_frequence.png' \
             && data.files[0].type === 'image/png' \
             && data.files[0].size === 8 \
             && data.files[0].lastModified > 0;",
        ),
    )]);

    assert!(host.supports_sharing());
    assert!(host.can_share(&png_request()));
}

#[wasm_bindgen_test]
fn can_share_answering_false_is_unsupported() {
    let host = fake_navigator(&[("canShare", returning("return false;"))]);

    assert!(!host.can_share(&png_request()));
}

#[wasm_bindgen_test]
fn throwing_can_share_is_unsupported() {
    let host = fake_navigator(&[("canShare", returning("throw new TypeError('bad');"))]);

    assert!(!host.can_share(&png_request()));
}

#[wasm_bindgen_test]
fn thrown_error_becomes_dispatch_error() {
    let host = fake_navigator(&[(
        "share",
        returning("throw new Error('Permission denied');"),
    )]);

    let err = host.dispatch(png_request()).unwrap_err();
    assert_eq!(err.message(), "Permission denied");
}

#[wasm_bindgen_test]
fn thrown_string_becomes_dispatch_error() {
    let host = fake_navigator(&[("share", returning("throw 'blocked';"))]);

    let err = host.dispatch(png_request()).unwrap_err();
    assert_eq!(err.message(), "blocked");
}

#[wasm_bindgen_test]
fn missing_share_method_is_dispatch_error() {
    let host = fake_navigator(&[]);

    assert!(host.dispatch(png_request()).is_err());
}

#[wasm_bindgen_test]
fn late_rejection_still_counts_as_accepted() {
    let host = fake_navigator(&[(
        "share",
        returning("return Promise.reject(new Error('AbortError'));"),
    )]);

    assert!(host.dispatch(png_request()).is_ok());
}

#[wasm_bindgen_test]
fn share_maps_navigator_outcomes() {
    let accepting = fake_navigator(&[
        ("canShare", returning("return true;")),
        ("share", returning("return Promise.resolve();")),
    ]);
    assert_eq!(share(&accepting, PNG_SIGNATURE), ShareResult::Success);

    let denying = fake_navigator(&[
        ("canShare", returning("return true;")),
        ("share", returning("throw new Error('Permission denied');")),
    ]);
    assert_eq!(
        share(&denying, PNG_SIGNATURE),
        ShareResult::Failure("Erreur: Permission denied".to_string())
    );
}

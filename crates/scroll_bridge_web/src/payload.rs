//! Decoding of values handed to the JS `scrollIntoView` entry point.
//!
//! The wasm side reduces the incoming `JsValue` to its JSON text (or `None`
//! when it has none); everything after that is plain Rust and tested here.

use scroll_bridge::{BridgeError, ScrollRequest};

/// `raw` is the payload's JSON text: either the string the caller passed, or
/// `JSON.stringify` of the object. `None` means the value had no JSON form.
pub fn decode_payload(raw: Option<String>) -> Result<ScrollRequest, BridgeError> {
    let raw = raw.ok_or(BridgeError::UnserializablePayload)?;
    ScrollRequest::from_json(&raw)
}

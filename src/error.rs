//! Error types for the scroll bridge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The request named an element that is not in the document.
    #[error("no element with id {id:?} in the document")]
    ElementNotFound { id: String },

    /// An inbound payload did not match the `ScrollRequest` shape.
    #[error("malformed scroll request: {0}")]
    Decode(#[from] serde_json::Error),

    /// A bridge was attached to a port other than the one it is configured for.
    #[error("bridge configured for port {expected:?} cannot attach to {actual:?}")]
    PortMismatch { expected: String, actual: String },

    /// A send that must be handled found nobody listening on the port.
    #[error("no subscriber on port {port:?}")]
    NoSubscriber { port: String },

    /// The inbound value has no JSON form (`undefined`, a function, ...).
    #[error("payload is not serializable")]
    UnserializablePayload,

    /// The host environment exposes no document to scroll.
    #[error("no document available")]
    NoDocument,
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;

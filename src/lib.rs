//! Bridge between a browser-hosted application and `Element.scrollIntoView`.
//!
//! The application emits [`ScrollRequest`]s on its `scrollIntoView` [`Port`].
//! A [`ScrollBridge`] subscribed to that port looks the target element up in
//! the [`Document`] and scrolls it into view, overlaying the request's options
//! onto the defaults `{behavior: smooth, block: nearest, inline: center}`.
//!
//! Everything here is host-testable; the web-sys binding lives in the
//! `scroll_bridge_web` crate.

pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod options;
pub mod port;
pub mod request;

pub use app::{EmbeddedApp, Ports};
pub use bridge::{Document, ScrollBridge};
pub use config::{BridgeConfig, MissingElementPolicy, SCROLL_PORT};
pub use error::BridgeError;
pub use options::{ScrollBehavior, ScrollLogicalPosition, ScrollOptions};
pub use port::{Port, Subscription};
pub use request::{merge, ScrollRequest};

//! The embedded application seen from the outside: something that can be
//! initialized once and exposes outbound ports.

use crate::config::SCROLL_PORT;
use crate::port::Port;
use crate::request::ScrollRequest;

/// Outbound ports exposed by an application instance.
#[derive(Debug, Clone)]
pub struct Ports {
    pub scroll_into_view: Port<ScrollRequest>,
}

impl Ports {
    pub fn new() -> Self {
        Self {
            scroll_into_view: Port::new(SCROLL_PORT),
        }
    }
}

impl Default for Ports {
    fn default() -> Self {
        Self::new()
    }
}

/// A running front-end application.
///
/// Created once at startup and kept for the lifetime of the page; there is
/// no teardown in normal operation.
pub trait EmbeddedApp {
    fn init() -> Self;

    fn ports(&self) -> &Ports;
}

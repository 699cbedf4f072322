//! The scroll bridge: one port message in, one scroll-into-view call out.

use tracing::{debug, warn};

use crate::config::{BridgeConfig, MissingElementPolicy};
use crate::error::{BridgeError, Result};
use crate::options::ScrollOptions;
use crate::port::{Port, Subscription};
use crate::request::{merge, ScrollRequest};

/// The slice of a DOM document the bridge needs.
pub trait Document {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn scroll_into_view(&self, element: &Self::Element, options: &ScrollOptions);
}

pub struct ScrollBridge<D> {
    document: D,
    config: BridgeConfig,
}

impl<D: Document> ScrollBridge<D> {
    pub fn new(document: D) -> Self {
        Self::with_config(document, BridgeConfig::default())
    }

    pub fn with_config(document: D, config: BridgeConfig) -> Self {
        Self { document, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Look up `request.id` and scroll it into view with the merged options.
    ///
    /// A missing element is an error under the default policy; nothing is
    /// scrolled in that case.
    pub fn handle(&self, request: &ScrollRequest) -> Result<()> {
        let Some(element) = self.document.element_by_id(&request.id) else {
            return match self.config.on_missing {
                MissingElementPolicy::FailFast => Err(BridgeError::ElementNotFound {
                    id: request.id.clone(),
                }),
                MissingElementPolicy::Ignore => {
                    warn!("scroll target {:?} not found, ignoring", request.id);
                    Ok(())
                }
            };
        };

        let options = merge(self.config.defaults, request);
        debug!("scrolling #{} into view ({})", request.id, options);
        self.document.scroll_into_view(&element, &options);
        Ok(())
    }
}

impl<D: Document + 'static> ScrollBridge<D> {
    /// Subscribe the bridge to `port`. The bridge lives as long as the
    /// subscription does.
    ///
    /// Fails with `PortMismatch` if `port` is not the port named in the
    /// bridge's config; nothing is subscribed in that case.
    pub fn attach(self, port: &Port<ScrollRequest>) -> Result<Subscription> {
        if port.name() != self.config.port {
            return Err(BridgeError::PortMismatch {
                expected: self.config.port.clone(),
                actual: port.name().to_string(),
            });
        }
        Ok(port.subscribe(move |request| self.handle(request)))
    }
}

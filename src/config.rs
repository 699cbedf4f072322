use serde::{Deserialize, Serialize};

use crate::options::ScrollOptions;

/// Name of the application port the bridge listens on.
pub const SCROLL_PORT: &str = "scrollIntoView";

/// What to do when a request names an element that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingElementPolicy {
    /// Report `ElementNotFound` to the sender.
    #[default]
    FailFast,
    /// Log a warning and carry on.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub defaults: ScrollOptions,
    #[serde(default)]
    pub on_missing: MissingElementPolicy,
}

fn default_port() -> String {
    SCROLL_PORT.to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            defaults: ScrollOptions::DEFAULT,
            on_missing: MissingElementPolicy::FailFast,
        }
    }
}

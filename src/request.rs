use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{ScrollBehavior, ScrollLogicalPosition, ScrollOptions};

/// One outbound "please scroll this element into view" message.
///
/// Produced by the application, consumed once by the bridge, then dropped.
/// Absent fields fall back to the bridge defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Target element id. Not validated here; a missing element is reported
    /// when the bridge looks it up.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<ScrollBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<ScrollLogicalPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<ScrollLogicalPosition>,
}

impl ScrollRequest {
    /// Request with no overrides.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            behavior: None,
            block: None,
            inline: None,
        }
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn with_block(mut self, block: ScrollLogicalPosition) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_inline(mut self, inline: ScrollLogicalPosition) -> Self {
        self.inline = Some(inline);
        self
    }

    /// Decode a JSON payload such as `{"id":"section-2","block":"start"}`.
    ///
    /// `null` option fields count as absent. Unrecognised option values are
    /// rejected rather than passed through to the DOM.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Effective options for this request over `defaults`.
    pub fn effective_options(&self, defaults: ScrollOptions) -> ScrollOptions {
        merge(defaults, self)
    }
}

/// Overlay the request's optional fields onto `defaults`.
pub fn merge(defaults: ScrollOptions, overrides: &ScrollRequest) -> ScrollOptions {
    ScrollOptions {
        behavior: overrides.behavior.unwrap_or(defaults.behavior),
        block: overrides.block.unwrap_or(defaults.block),
        inline: overrides.inline.unwrap_or(defaults.inline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn bare_request_gets_all_defaults() {
        let req = ScrollRequest::new("section-2");
        assert_eq!(
            req.effective_options(ScrollOptions::DEFAULT),
            ScrollOptions {
                behavior: ScrollBehavior::Smooth,
                block: ScrollLogicalPosition::Nearest,
                inline: ScrollLogicalPosition::Center,
            }
        );
    }

    #[test]
    fn block_override_keeps_other_defaults() {
        let req = ScrollRequest::new("section-2").with_block(ScrollLogicalPosition::Start);
        assert_eq!(
            merge(ScrollOptions::DEFAULT, &req),
            ScrollOptions {
                behavior: ScrollBehavior::Smooth,
                block: ScrollLogicalPosition::Start,
                inline: ScrollLogicalPosition::Center,
            }
        );
    }

    #[test]
    fn caller_values_win_for_every_field() {
        for &behavior in ScrollBehavior::all() {
            for &block in ScrollLogicalPosition::all() {
                for &inline in ScrollLogicalPosition::all() {
                    let req = ScrollRequest::new("x")
                        .with_behavior(behavior)
                        .with_block(block)
                        .with_inline(inline);
                    let eff = merge(ScrollOptions::DEFAULT, &req);
                    assert_eq!(eff.behavior, behavior);
                    assert_eq!(eff.block, block);
                    assert_eq!(eff.inline, inline);
                }
            }
        }
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let defaults = ScrollOptions::DEFAULT;
        let req = ScrollRequest::new("a").with_inline(ScrollLogicalPosition::End);
        let before = req.clone();

        let first = merge(defaults, &req);
        let second = merge(defaults, &req);

        assert_eq!(first, second);
        assert_eq!(req, before);
        assert_eq!(defaults, ScrollOptions::DEFAULT);
    }

    #[test]
    fn decodes_partial_payload() {
        let req = ScrollRequest::from_json(r#"{"id":"section-2","block":"start"}"#).unwrap();
        assert_eq!(req.id, "section-2");
        assert_eq!(req.block, Some(ScrollLogicalPosition::Start));
        assert_eq!(req.behavior, None);
        assert_eq!(req.inline, None);
    }

    #[test]
    fn null_fields_count_as_absent() {
        let req =
            ScrollRequest::from_json(r#"{"id":"s","behavior":null,"inline":null}"#).unwrap();
        assert_eq!(req, ScrollRequest::new("s"));
    }

    #[test]
    fn unknown_values_and_missing_id_are_rejected() {
        let bad = ScrollRequest::from_json(r#"{"id":"s","behavior":"instant"}"#);
        assert!(matches!(bad, Err(BridgeError::Decode(_))));

        let no_id = ScrollRequest::from_json(r#"{"block":"end"}"#);
        assert!(matches!(no_id, Err(BridgeError::Decode(_))));
    }

    #[test]
    fn extra_keys_are_ignored() {
        let v = serde_json::json!({ "id": "s", "block": "end", "source": "nav" });
        let req = ScrollRequest::from_value(v).unwrap();
        assert_eq!(req.block, Some(ScrollLogicalPosition::End));
    }
}

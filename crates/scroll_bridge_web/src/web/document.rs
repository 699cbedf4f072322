use scroll_bridge::{BridgeError, Document, ScrollBehavior, ScrollLogicalPosition, ScrollOptions};

/// The page's live `document`.
pub(super) struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub(super) fn current() -> Result<Self, BridgeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BridgeError::NoDocument)?;
        Ok(Self { document })
    }
}

impl Document for WebDocument {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &web_sys::Element, options: &ScrollOptions) {
        element.scroll_into_view_with_scroll_into_view_options(&to_web_options(options));
    }
}

fn to_web_options(options: &ScrollOptions) -> web_sys::ScrollIntoViewOptions {
    let out = web_sys::ScrollIntoViewOptions::new();
    out.set_behavior(match options.behavior {
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    out.set_block(to_web_position(options.block));
    out.set_inline(to_web_position(options.inline));
    out
}

fn to_web_position(p: ScrollLogicalPosition) -> web_sys::ScrollLogicalPosition {
    match p {
        ScrollLogicalPosition::Start => web_sys::ScrollLogicalPosition::Start,
        ScrollLogicalPosition::Center => web_sys::ScrollLogicalPosition::Center,
        ScrollLogicalPosition::End => web_sys::ScrollLogicalPosition::End,
        ScrollLogicalPosition::Nearest => web_sys::ScrollLogicalPosition::Nearest,
    }
}

//! Page inventory for the demo app.
//!
//! Kept out of the wasm-only `web` module so the navigation model can be
//! unit-tested on the host.

use scroll_bridge::{ScrollBehavior, ScrollLogicalPosition, ScrollRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Install,
    Usage,
    Reference,
    Faq,
}

impl Section {
    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Install => "install",
            Section::Usage => "usage",
            Section::Reference => "reference",
            Section::Faq => "faq",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Install => "Install",
            Section::Usage => "Usage",
            Section::Reference => "Reference",
            Section::Faq => "FAQ",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Section::Overview => "The app asks for scrolling through its scrollIntoView port. The bridge finds the element and lets the browser do the rest.",
            Section::Install => "Build with --features web for wasm32. Native builds compile to a no-op stub.",
            Section::Usage => "Send {id, behavior?, block?, inline?}. Missing options fall back to smooth / nearest / center.",
            Section::Reference => "behavior: auto | smooth\nblock: start | center | end | nearest\ninline: start | center | end | nearest",
            Section::Faq => "What if the id does not exist? The bridge reports ElementNotFound and nothing scrolls.",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Install,
            Section::Usage,
            Section::Reference,
            Section::Faq,
        ]
    }
}

/// One navigation link and the request it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Jump(Section),
    /// Points at an id that is not on the page.
    Broken,
}

pub const BROKEN_TARGET: &str = "no-such-section";

impl NavEntry {
    pub fn label(self) -> &'static str {
        match self {
            NavEntry::Jump(s) => s.title(),
            NavEntry::Broken => "Broken link",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            NavEntry::Jump(s) => s.id(),
            NavEntry::Broken => BROKEN_TARGET,
        }
    }

    /// Each entry exercises a different mix of overrides.
    pub fn request(self) -> ScrollRequest {
        let req = ScrollRequest::new(self.target());
        match self {
            NavEntry::Jump(Section::Overview) => req,
            NavEntry::Jump(Section::Install) => req.with_block(ScrollLogicalPosition::Start),
            NavEntry::Jump(Section::Usage) => req.with_behavior(ScrollBehavior::Auto),
            NavEntry::Jump(Section::Reference) => req
                .with_block(ScrollLogicalPosition::Center)
                .with_inline(ScrollLogicalPosition::Nearest),
            NavEntry::Jump(Section::Faq) => req.with_block(ScrollLogicalPosition::End),
            NavEntry::Broken => req,
        }
    }

    pub fn all() -> Vec<NavEntry> {
        Section::all()
            .iter()
            .copied()
            .map(NavEntry::Jump)
            .chain(std::iter::once(NavEntry::Broken))
            .collect()
    }
}

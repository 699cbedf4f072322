use std::fmt;

use serde::{Deserialize, Serialize};

/// Scroll animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump without animating.
    Auto,
    /// Animated scroll.
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::Auto => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }

    pub fn all() -> &'static [ScrollBehavior] {
        &[ScrollBehavior::Auto, ScrollBehavior::Smooth]
    }
}

/// Alignment of the element inside the scroll container along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollLogicalPosition {
    Start,
    Center,
    End,
    /// Scroll as little as possible to bring the element into view.
    Nearest,
}

impl ScrollLogicalPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollLogicalPosition::Start => "start",
            ScrollLogicalPosition::Center => "center",
            ScrollLogicalPosition::End => "end",
            ScrollLogicalPosition::Nearest => "nearest",
        }
    }

    pub fn all() -> &'static [ScrollLogicalPosition] {
        &[
            ScrollLogicalPosition::Start,
            ScrollLogicalPosition::Center,
            ScrollLogicalPosition::End,
            ScrollLogicalPosition::Nearest,
        ]
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScrollLogicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved options handed to the scroll-into-view call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollLogicalPosition,
    pub inline: ScrollLogicalPosition,
}

impl ScrollOptions {
    pub const DEFAULT: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollLogicalPosition::Nearest,
        inline: ScrollLogicalPosition::Center,
    };
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ScrollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "behavior={} block={} inline={}",
            self.behavior, self.block, self.inline
        )
    }
}

//! Browser binding for `scroll_bridge`.
//!
//! Without `--features web` on wasm32 only the host-testable pieces
//! (`sections`, `payload`) are built, so the workspace compiles and tests on
//! native targets.

pub mod payload;
pub mod sections;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{scroll_into_view, start};

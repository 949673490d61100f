//! # Circuit Notation
//!
//! Turns a compact series/parallel circuit notation into a schematic layout.
//!
//! This library provides:
//! - A lenient tokenizer and parser for notation such as `R1ntR2` or
//!   `R//R1nt(R2//R3)`
//! - Classification of component names into component kinds
//! - A recursive layout engine producing placed components and orthogonal wires
//! - JSON output for an interactive schematic editor
//!
//! ## Architecture
//!
//! - [`dsl`] - Lexer, classifier and parser for the notation
//! - [`layout`] - Geometry, configuration and the layout engine
//! - [`error`] - Error type used by the fallible entry points
//!
//! ```text
//! notation → tokens → tree → { components, wires }
//! ```
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! circnot 'UntKdntR1nt(R2//R3)' --pretty
//! ```
//!
//! ### Library
//!
//! ```
//! let layout = circuit_notation::parse("R1ntR2");
//! assert_eq!(layout.components.len(), 2);
//! assert_eq!(layout.wires.len(), 1);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { layout_notation } from 'circuit_notation';
//!
//! const { components, wires } = JSON.parse(layout_notation('R//R1nt(R2//R3)'));
//! ```

pub mod dsl;
pub mod error;
pub mod layout;

// Re-export main types for convenience
pub use dsl::{ComponentKind, Node};
pub use error::{NotationError, Result};
pub use layout::{LayoutConfig, LayoutEngine, LayoutResult, PlacedComponent, Wire};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{canonical_notation, layout_notation};

use log::warn;

/// Parse notation and lay it out with the default configuration.
///
/// Never fails: malformed input produces placeholders, and any error is
/// logged and turned into an empty layout.
pub fn parse(notation: &str) -> LayoutResult {
    parse_with_config(notation, &LayoutConfig::default())
}

/// Parse notation and lay it out with the given configuration.
///
/// Like [`parse`], errors are logged and produce an empty layout.
pub fn parse_with_config(notation: &str, config: &LayoutConfig) -> LayoutResult {
    try_parse(notation, config).unwrap_or_else(|err| {
        warn!(error:% = err; "Notation could not be laid out");
        LayoutResult::empty()
    })
}

/// Parse notation and lay it out, reporting failures.
///
/// Empty input is not a failure and yields an empty layout.
pub fn try_parse(notation: &str, config: &LayoutConfig) -> Result<LayoutResult> {
    match dsl::parse_tree_with_depth(notation, config.max_depth)? {
        Some(tree) => LayoutEngine::new(config.clone()).layout(&tree),
        None => Ok(LayoutResult::empty()),
    }
}

//! Notation front-end: lexer, classifier and parser.
//!
//! The notation describes a circuit as a series/parallel expression over
//! component names. It is meant to be typed quickly, so parsing is lenient
//! and never rejects partial input.
//!
//! # Grammar Overview
//!
//! ```text
//! expression     = series_chain
//! series_chain   = parallel_group { [ "nt" ] parallel_group }
//! parallel_group = atom { "//" atom }
//! atom           = "(" expression ")" | component_name
//!
//! component_name = { any char except whitespace, "(", ")", "/" }
//! ```
//!
//! `//` binds tighter than `nt`, and `nt` is matched in any letter case. Two
//! groups written next to each other are joined in series.
//!
//! # Component Names
//!
//! | Prefix | Kind |
//! |--------|------|
//! | `DEL`, `LED` | LED |
//! | `Kd` | Closed switch |
//! | `Ko`, `K` | Open switch |
//! | `U`, `G`, `P` | Battery |
//! | `R` | Resistor |
//! | `L` | Lamp |
//! | `M` | Motor |
//! | `D` | Diode |
//! | `C` | Capacitor |
//! | `A` | Ammeter |
//! | `V` | Voltmeter |
//! | `F` | Fuse |
//! | `B` | Buzzer |
//!
//! Anything else is drawn as a resistor.
//!
//! # Example
//!
//! ```text
//! U nt Kd nt R1 nt (R2 // R3)
//! ```

mod ast;
mod classify;
mod lexer;
mod parser;

pub use ast::*;
pub use classify::{classify, Classified};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parser, DEFAULT_MAX_DEPTH};

use crate::error::Result;

/// Tokenize a notation string.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

/// Parse a notation string into an expression tree.
///
/// Returns `Ok(None)` for empty or whitespace-only input.
pub fn parse_tree(input: &str) -> Result<Option<Node>> {
    parse_tree_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parse a notation string with a custom nesting limit.
pub fn parse_tree_with_depth(input: &str, max_depth: usize) -> Result<Option<Node>> {
    Parser::new(Lexer::new(input))
        .with_max_depth(max_depth)
        .parse()
}

//! Layout back-end: turns an expression tree into placed components and
//! orthogonal wires.
//!
//! Series groups run left to right on a shared center line. Parallel groups
//! stack their branches vertically between a left and a right rail; each
//! branch connects to both rails with a single-bend wire.

mod config;
mod engine;
mod geometry;
mod types;

pub use config::*;
pub use engine::{LayoutEngine, Placement};
pub use geometry::{Bounds, Point, Size};
pub use types::*;

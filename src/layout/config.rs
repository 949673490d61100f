//! Spacing configuration for the layout engine.

use crate::dsl::DEFAULT_MAX_DEPTH;
use crate::error::{NotationError, Result};

/// Horizontal gap between consecutive series elements.
pub const DEFAULT_SERIES_GAP: f32 = 40.0;

/// Vertical gap between stacked parallel branches.
pub const DEFAULT_BRANCH_GAP: f32 = 30.0;

/// Space reserved between a rail and the widest branch, split evenly.
pub const DEFAULT_RAIL_PADDING: f32 = 40.0;

/// Margin between the canvas origin and the top-left of the diagram.
pub const DEFAULT_MARGIN: f32 = 20.0;

/// Configuration for the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Gap between series elements.
    pub series_gap: f32,
    /// Gap between parallel branches.
    pub branch_gap: f32,
    /// Padding between rails and branches.
    pub rail_padding: f32,
    /// Top-left margin of the whole diagram.
    pub margin: f32,
    /// Maximum parenthesis nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            series_gap: DEFAULT_SERIES_GAP,
            branch_gap: DEFAULT_BRANCH_GAP,
            rail_padding: DEFAULT_RAIL_PADDING,
            margin: DEFAULT_MARGIN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between series elements.
    pub fn with_series_gap(mut self, series_gap: f32) -> Self {
        self.series_gap = series_gap;
        self
    }

    /// Set the gap between parallel branches.
    pub fn with_branch_gap(mut self, branch_gap: f32) -> Self {
        self.branch_gap = branch_gap;
        self
    }

    /// Set the padding between rails and branches.
    pub fn with_rail_padding(mut self, rail_padding: f32) -> Self {
        self.rail_padding = rail_padding;
        self
    }

    /// Set the top-left margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reject spacings that are negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let spacings = [
            ("series gap", self.series_gap),
            ("branch gap", self.branch_gap),
            ("rail padding", self.rail_padding),
            ("margin", self.margin),
        ];
        for (name, value) in spacings {
            if !value.is_finite() || value < 0.0 {
                return Err(NotationError::invalid_config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

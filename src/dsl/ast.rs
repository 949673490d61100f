//! Abstract Syntax Tree types for the circuit notation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::Size;

/// A node of the series/parallel expression tree.
///
/// `Series` and `Parallel` always hold at least two children; the parser
/// collapses single-child groups into the child itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A classified component leaf
    Component {
        /// Semantic component type
        kind: ComponentKind,
        /// Original token text, casing preserved
        label: String,
    },
    /// Placeholder for a missing atom or a stray operator.
    ///
    /// `text` is the offending token text, empty when nothing was there.
    Unresolved { text: String },
    /// Sequential composition, drawn left to right
    Series(Vec<Node>),
    /// Concurrent composition, drawn as stacked branches
    Parallel(Vec<Node>),
}

impl Node {
    /// Label used when an unresolved placeholder is drawn.
    pub const PLACEHOLDER_LABEL: &'static str = "?";

    /// Create a component leaf.
    pub fn component(kind: ComponentKind, label: impl Into<String>) -> Self {
        Self::Component {
            kind,
            label: label.into(),
        }
    }

    /// Create a placeholder for a missing atom.
    pub fn missing() -> Self {
        Self::Unresolved {
            text: String::new(),
        }
    }

    /// Whether this node is drawn as a single symbol.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Component { .. } | Self::Unresolved { .. })
    }

    /// Number of drawn symbols in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Component { .. } | Self::Unresolved { .. } => 1,
            Self::Series(children) | Self::Parallel(children) => {
                children.iter().map(Node::leaf_count).sum()
            }
        }
    }

    /// Number of placeholders in this subtree.
    pub fn unresolved_count(&self) -> usize {
        match self {
            Self::Component { .. } => 0,
            Self::Unresolved { .. } => 1,
            Self::Series(children) | Self::Parallel(children) => {
                children.iter().map(Node::unresolved_count).sum()
            }
        }
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Component { .. } | Self::Unresolved { .. } => 1,
            Self::Series(children) | Self::Parallel(children) => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Renders the canonical notation: spaced operators and parentheses only
/// where a group is nested inside a tighter-binding one.
///
/// Placeholders print as `?`, which the parser reads back as a missing atom.
/// The output re-parses to the same tree, except that a stray-operator
/// placeholder comes back with empty text.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Component { label, .. } => f.write_str(label),
            Node::Unresolved { .. } => f.write_str(Node::PLACEHOLDER_LABEL),
            Node::Series(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" nt ")?;
                    }
                    match child {
                        Node::Series(_) => write!(f, "({child})")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
            Node::Parallel(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" // ")?;
                    }
                    match child {
                        Node::Series(_) | Node::Parallel(_) => write!(f, "({child})")?,
                        _ => write!(f, "{child}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Component types known to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// Resistor, also the fallback for unknown names
    #[default]
    Resistor,
    /// Battery or DC generator
    Battery,
    /// Switch in the closed position
    ClosedSwitch,
    /// Switch in the open position
    OpenSwitch,
    /// Lamp
    Lamp,
    /// Light-emitting diode
    Led,
    /// Diode
    Diode,
    /// Motor
    Motor,
    /// Capacitor
    Capacitor,
    /// Ammeter
    Ammeter,
    /// Voltmeter
    Voltmeter,
    /// Fuse
    Fuse,
    /// Buzzer
    Buzzer,
}

impl ComponentKind {
    /// Symbol footprint in layout units.
    pub fn footprint(&self) -> Size {
        match self {
            Self::Resistor | Self::Fuse => Size::new(60.0, 24.0),
            Self::Battery => Size::new(40.0, 50.0),
            Self::ClosedSwitch | Self::OpenSwitch => Size::new(60.0, 30.0),
            Self::Lamp | Self::Motor | Self::Ammeter | Self::Voltmeter => Size::new(44.0, 44.0),
            Self::Led | Self::Diode => Size::new(48.0, 36.0),
            Self::Capacitor => Size::new(30.0, 44.0),
            Self::Buzzer => Size::new(44.0, 40.0),
        }
    }
}

//! Recursive series/parallel layout.
//!
//! Every subtree is laid out centered on its anchor. Its entry point is the
//! middle of its left edge and its exit point the middle of its right edge, so
//! a parent only needs the child's size to connect it. Children are laid out
//! around the local origin first and then moved into place with a single
//! translation.

use log::debug;

use super::config::LayoutConfig;
use super::geometry::{Point, Size};
use super::types::{IdGenerator, LayoutResult, PlacedComponent, Wire};
use crate::dsl::{ComponentKind, Node};
use crate::error::{NotationError, Result};

/// A laid-out subtree together with its bounding size.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub layout: LayoutResult,
    pub size: Size,
    pub anchor: Point,
}

impl Placement {
    /// Middle of the left edge, where incoming wires attach.
    pub fn entry(&self) -> Point {
        Point::new(self.anchor.x - self.size.width() / 2.0, self.anchor.y)
    }

    /// Middle of the right edge, where outgoing wires attach.
    pub fn exit(&self) -> Point {
        Point::new(self.anchor.x + self.size.width() / 2.0, self.anchor.y)
    }

    fn translate(&mut self, offset: Point) {
        self.layout.translate(offset);
        self.anchor = self.anchor.add_point(offset);
    }
}

/// Layout engine for parsed notation trees.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lay out a whole tree so that its top-left corner sits at the configured
    /// margin. Ids start from zero on every call.
    pub fn layout(&self, node: &Node) -> Result<LayoutResult> {
        self.config.validate()?;

        let mut ids = IdGenerator::new();
        let mut placement = self.layout_at(node, Point::default(), &mut ids);
        placement.translate(Point::new(
            self.config.margin + placement.size.width() / 2.0,
            self.config.margin + placement.size.height() / 2.0,
        ));

        check_finite(&placement.layout)?;
        debug!(
            components = placement.layout.components.len(),
            wires = placement.layout.wires.len(),
            ids = ids.issued(),
            width = placement.size.width(),
            height = placement.size.height();
            "Laid out circuit"
        );
        Ok(placement.layout)
    }

    /// Lay out `node` centered on `anchor`, drawing ids from `ids`.
    pub fn layout_at(&self, node: &Node, anchor: Point, ids: &mut IdGenerator) -> Placement {
        let mut placement = match node {
            Node::Component { kind, label } => self.place_component(*kind, label, ids),
            Node::Unresolved { .. } => {
                self.place_component(ComponentKind::default(), Node::PLACEHOLDER_LABEL, ids)
            }
            Node::Series(children) => self.place_series(children, ids),
            Node::Parallel(children) => self.place_parallel(children, ids),
        };
        placement.translate(anchor);
        placement
    }

    fn place_component(&self, kind: ComponentKind, label: &str, ids: &mut IdGenerator) -> Placement {
        let component = PlacedComponent {
            id: ids.next_id(),
            kind,
            x: 0.0,
            y: 0.0,
            rotation: 0,
            label: label.to_string(),
        };
        Placement {
            layout: LayoutResult {
                components: vec![component],
                wires: Vec::new(),
            },
            size: kind.footprint(),
            anchor: Point::default(),
        }
    }

    fn place_series(&self, children: &[Node], ids: &mut IdGenerator) -> Placement {
        let gap = self.config.series_gap;
        let placed: Vec<Placement> = children
            .iter()
            .map(|child| self.layout_at(child, Point::default(), ids))
            .collect();

        let gaps = gap * placed.len().saturating_sub(1) as f32;
        let width = placed.iter().map(|p| p.size.width()).sum::<f32>() + gaps;
        let height = placed.iter().map(|p| p.size.height()).fold(0.0, f32::max);

        let mut layout = LayoutResult::empty();
        let mut cursor = -width / 2.0;
        let mut previous_exit: Option<Point> = None;

        for mut child in placed {
            child.translate(Point::new(cursor + child.size.width() / 2.0, 0.0));
            if let Some(exit) = previous_exit {
                layout.wires.push(Wire::straight(ids.next_id(), exit, child.entry()));
            }
            previous_exit = Some(child.exit());
            cursor += child.size.width() + gap;
            layout.append(child.layout);
        }

        Placement {
            layout,
            size: Size::new(width, height),
            anchor: Point::default(),
        }
    }

    fn place_parallel(&self, children: &[Node], ids: &mut IdGenerator) -> Placement {
        let gap = self.config.branch_gap;
        let padding = self.config.rail_padding;
        let placed: Vec<Placement> = children
            .iter()
            .map(|child| self.layout_at(child, Point::default(), ids))
            .collect();

        let branch_width = placed.iter().map(|p| p.size.width()).fold(0.0, f32::max) + padding;
        let width = branch_width + padding;
        let gaps = gap * placed.len().saturating_sub(1) as f32;
        let height = placed.iter().map(|p| p.size.height()).sum::<f32>() + gaps;

        let left_rail = Point::new(-width / 2.0, 0.0);
        let right_rail = Point::new(width / 2.0, 0.0);

        let mut layout = LayoutResult::empty();
        let mut cursor = -height / 2.0;

        for mut branch in placed {
            // Branches are centered horizontally within the shared column.
            branch.translate(Point::new(0.0, cursor + branch.size.height() / 2.0));
            layout
                .wires
                .push(Wire::elbow(ids.next_id(), left_rail, branch.entry(), true));
            layout
                .wires
                .push(Wire::elbow(ids.next_id(), branch.exit(), right_rail, false));
            cursor += branch.size.height() + gap;
            layout.append(branch.layout);
        }

        Placement {
            layout,
            size: Size::new(width, height),
            anchor: Point::default(),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn check_finite(layout: &LayoutResult) -> Result<()> {
    for component in &layout.components {
        if !component.position().is_finite() {
            return Err(NotationError::NonFiniteGeometry {
                id: component.id.to_string(),
            });
        }
    }
    for wire in &layout.wires {
        if !wire.points.iter().all(|p| p.is_finite()) {
            return Err(NotationError::NonFiniteGeometry {
                id: wire.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn r(label: &str) -> Node {
        Node::component(ComponentKind::Resistor, label)
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::default()
    }

    #[test]
    fn test_leaf_centered_on_anchor() {
        let mut ids = IdGenerator::new();
        let p = engine().layout_at(&r("R1"), Point::new(100.0, 50.0), &mut ids);
        assert_eq!(p.layout.components.len(), 1);
        assert_eq!(p.layout.components[0].position(), Point::new(100.0, 50.0));
        assert_eq!(p.size, ComponentKind::Resistor.footprint());
        assert_relative_eq!(p.entry().x, 70.0);
        assert_relative_eq!(p.exit().x, 130.0);
    }

    #[test]
    fn test_series_geometry() {
        let mut ids = IdGenerator::new();
        let tree = Node::Series(vec![r("R1"), r("R2"), r("R3")]);
        let p = engine().layout_at(&tree, Point::default(), &mut ids);

        // 3 * 60 wide plus two 40 gaps
        assert_relative_eq!(p.size.width(), 260.0);
        assert_relative_eq!(p.size.height(), 24.0);

        let xs: Vec<f32> = p.layout.components.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![-100.0, 0.0, 100.0]);
        assert!(p.layout.components.iter().all(|c| c.y == 0.0));

        assert_eq!(p.layout.wires.len(), 2);
        assert_eq!(
            p.layout.wires[0].points,
            vec![Point::new(-70.0, 0.0), Point::new(-30.0, 0.0)]
        );
    }

    #[test]
    fn test_parallel_geometry() {
        let mut ids = IdGenerator::new();
        let tree = Node::Parallel(vec![r("R1"), r("R2")]);
        let p = engine().layout_at(&tree, Point::default(), &mut ids);

        // 60 widest branch + 40 branch padding + 40 rail padding
        assert_relative_eq!(p.size.width(), 140.0);
        // 24 + 30 + 24
        assert_relative_eq!(p.size.height(), 78.0);

        let ys: Vec<f32> = p.layout.components.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![-27.0, 27.0]);
        assert!(p.layout.components.iter().all(|c| c.x == 0.0));

        assert_eq!(p.layout.wires.len(), 4);
        assert_eq!(
            p.layout.wires[0].points,
            vec![Point::new(-70.0, 0.0), Point::new(-70.0, -27.0), Point::new(-30.0, -27.0)]
        );
        assert_eq!(
            p.layout.wires[1].points,
            vec![Point::new(30.0, -27.0), Point::new(70.0, -27.0), Point::new(70.0, 0.0)]
        );
        assert!(p.layout.wires.iter().all(Wire::is_orthogonal));
    }

    #[test]
    fn test_nested_group_is_translated_as_a_whole() {
        let mut ids = IdGenerator::new();
        let inner = Node::Parallel(vec![r("R2"), r("R3")]);
        let tree = Node::Series(vec![r("R1"), inner.clone()]);
        let p = engine().layout_at(&tree, Point::default(), &mut ids);

        let standalone = engine().layout_at(&inner, Point::default(), &mut IdGenerator::new());
        let nested: Vec<Point> = p.layout.components[1..].iter().map(|c| c.position()).collect();
        let offset_x = nested[0].x - standalone.layout.components[0].x;
        for (a, b) in nested.iter().zip(&standalone.layout.components) {
            assert_relative_eq!(a.x - b.x, offset_x);
            assert_relative_eq!(a.y, b.y);
        }
    }

    #[test]
    fn test_unresolved_uses_placeholder_label() {
        let mut ids = IdGenerator::new();
        let p = engine().layout_at(&Node::missing(), Point::default(), &mut ids);
        assert_eq!(p.layout.components[0].label, "?");
        assert_eq!(p.layout.components[0].kind, ComponentKind::default());
    }

    #[test]
    fn test_layout_ids_unique_and_fresh() {
        let tree = Node::Series(vec![r("R1"), Node::Parallel(vec![r("R2"), r("R3")])]);
        let first = engine().layout(&tree).unwrap();
        let second = engine().layout(&tree).unwrap();
        assert_eq!(first, second);

        let mut ids: Vec<usize> = first
            .components
            .iter()
            .map(|c| c.id.0)
            .chain(first.wires.iter().map(|w| w.id.0))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), first.components.len() + first.wires.len());
        assert_eq!(ids[0], 0);
    }

    #[test]
    fn test_layout_respects_margin() {
        let layout = LayoutEngine::new(LayoutConfig::new().with_margin(20.0))
            .layout(&r("R1"))
            .unwrap();
        assert_eq!(layout.components[0].position(), Point::new(50.0, 32.0));
    }

    #[test]
    fn test_layout_rejects_invalid_config() {
        let engine = LayoutEngine::new(LayoutConfig::new().with_series_gap(f32::NAN));
        assert!(matches!(
            engine.layout(&r("R1")),
            Err(NotationError::InvalidConfig { .. })
        ));
    }
}

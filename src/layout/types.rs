//! Output types of the layout engine.
//!
//! All types derive [`serde::Serialize`] and [`serde::Deserialize`] so a
//! layout can be handed to the editor as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Point};
use crate::dsl::ComponentKind;
use crate::error::Result;

/// Identifier of an emitted component or wire, unique within one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Hands out element ids for one layout call.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    /// Generator whose first id is zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused id.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// A component placed on the canvas, centered on `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: ElementId,
    pub kind: ComponentKind,
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees. The engine always emits 0.
    pub rotation: u16,
    pub label: String,
}

impl PlacedComponent {
    /// Center of the symbol.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An orthogonal polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: ElementId,
    pub points: Vec<Point>,
}

impl Wire {
    /// Straight wire between two points.
    pub fn straight(id: ElementId, from: Point, to: Point) -> Self {
        Self {
            id,
            points: vec![from, to],
        }
    }

    /// Wire with a single bend. With `vertical_first` the path leaves `from`
    /// vertically, otherwise horizontally. A bend that would coincide with an
    /// endpoint is dropped.
    pub fn elbow(id: ElementId, from: Point, to: Point, vertical_first: bool) -> Self {
        let corner = if vertical_first {
            Point::new(from.x, to.y)
        } else {
            Point::new(to.x, from.y)
        };
        let mut points = vec![from];
        for p in [corner, to] {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        Self { id, points }
    }

    /// First point of the wire.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point of the wire.
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether every segment is horizontal or vertical.
    pub fn is_orthogonal(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
    }
}

/// Complete layout: the output of [`crate::parse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub components: Vec<PlacedComponent>,
    pub wires: Vec<Wire>,
}

impl LayoutResult {
    /// The layout of empty or failed input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }

    /// Bounding box of all component symbols and wire points.
    pub fn bounds(&self) -> Option<Bounds> {
        self.components
            .iter()
            .map(|c| c.position().to_bounds(c.kind.footprint()))
            .chain(
                self.wires
                    .iter()
                    .flat_map(|w| w.points.iter().copied().map(Bounds::at)),
            )
            .reduce(|a, b| a.merge(&b))
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub(crate) fn translate(&mut self, offset: Point) {
        for component in &mut self.components {
            component.x += offset.x;
            component.y += offset.y;
        }
        for wire in &mut self.wires {
            for point in &mut wire.points {
                *point = point.add_point(offset);
            }
        }
    }

    pub(crate) fn append(&mut self, mut other: LayoutResult) {
        self.components.append(&mut other.components);
        self.wires.append(&mut other.wires);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), ElementId(0));
        assert_eq!(ids.next_id(), ElementId(1));
        assert_eq!(ids.issued(), 2);
        assert_eq!(ElementId(7).to_string(), "E7");
    }

    #[test]
    fn test_elbow_routes() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 20.0);

        let v = Wire::elbow(ElementId(0), from, to, true);
        assert_eq!(v.points, vec![from, Point::new(0.0, 20.0), to]);
        assert!(v.is_orthogonal());

        let h = Wire::elbow(ElementId(1), from, to, false);
        assert_eq!(h.points, vec![from, Point::new(10.0, 0.0), to]);
    }

    #[test]
    fn test_elbow_collapses_degenerate_bend() {
        let w = Wire::elbow(ElementId(0), Point::new(0.0, 5.0), Point::new(10.0, 5.0), true);
        assert_eq!(w.points.len(), 2);
        assert!(w.is_orthogonal());
    }

    #[test]
    fn test_json_shape() {
        let layout = LayoutResult {
            components: vec![PlacedComponent {
                id: ElementId(0),
                kind: ComponentKind::Battery,
                x: 1.0,
                y: 2.0,
                rotation: 0,
                label: "U".to_string(),
            }],
            wires: vec![Wire::straight(ElementId(1), Point::new(0.0, 0.0), Point::new(3.0, 0.0))],
        };
        let value: serde_json::Value = serde_json::from_str(&layout.to_json().unwrap()).unwrap();
        assert_eq!(value["components"][0]["id"], 0);
        assert_eq!(value["components"][0]["kind"], "battery");
        assert_eq!(value["components"][0]["rotation"], 0);
        assert_eq!(value["wires"][0]["points"][1]["x"], 3.0);
    }

    #[test]
    fn test_translate_and_bounds() {
        let mut layout = LayoutResult {
            components: vec![],
            wires: vec![Wire::straight(ElementId(0), Point::new(-1.0, 0.0), Point::new(1.0, 2.0))],
        };
        layout.translate(Point::new(10.0, 10.0));
        let bounds = layout.bounds().unwrap();
        assert_eq!((bounds.min_x, bounds.min_y), (9.0, 10.0));
        assert_eq!((bounds.max_x, bounds.max_y), (11.0, 12.0));
        assert!(LayoutResult::empty().bounds().is_none());
    }

    #[test]
    fn test_bounds_cover_symbol_footprints() {
        let layout = LayoutResult {
            components: vec![PlacedComponent {
                id: ElementId(0),
                kind: ComponentKind::Resistor,
                x: 100.0,
                y: 50.0,
                rotation: 0,
                label: "R1".to_string(),
            }],
            wires: vec![],
        };
        let bounds = layout.bounds().unwrap();
        assert_eq!((bounds.min_x, bounds.max_x), (70.0, 130.0));
        assert_eq!((bounds.min_y, bounds.max_y), (38.0, 62.0));
        assert_eq!(bounds.width(), 60.0);
        assert_eq!(bounds.height(), 24.0);
    }
}

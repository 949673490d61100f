//! Points, sizes and bounding boxes in layout units.

use serde::{Deserialize, Serialize};

/// A position on the canvas. Y grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Whether both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts a center point and size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Width and height of a laid-out subtree or symbol
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// A degenerate rectangle covering one point
    pub fn at(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Horizontal extent
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Smallest rectangle containing both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bounds_is_centered() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(4.0, 6.0));
        assert_eq!(bounds.min_x, 8.0);
        assert_eq!(bounds.max_y, 23.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_merge() {
        let a = Bounds::at(Point::new(0.0, 0.0));
        let b = Bounds::at(Point::new(5.0, -3.0));
        let m = a.merge(&b);
        assert_eq!((m.min_x, m.min_y, m.max_x, m.max_y), (0.0, -3.0, 5.0, 0.0));
    }
}

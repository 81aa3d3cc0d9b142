//! Geometric primitives for hand-placed diagram elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Trellis uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are author-supplied pixel values; nothing here computes a
//! layout.

/// A 2D point in canvas coordinates.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::Point;
/// let tip = Point::new(210.0, 122.0);
/// assert_eq!(tip.x(), 210.0);
/// assert_eq!(tip.y(), 122.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
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

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds containing both points, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new_from_points(Point::new(240.0, 220.0), Point::new(140.0, 260.0));
    /// assert_eq!(bounds.min_x(), 140.0);
    /// assert_eq!(bounds.max_y(), 260.0);
    /// ```
    pub fn new_from_points(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns `true` if `other` lies entirely inside these bounds (edges included).
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::{Bounds, Point, Size};
    /// let canvas = Bounds::new_from_top_left(Point::default(), Size::new(420.0, 520.0));
    /// let stage = Bounds::new_from_top_left(Point::new(30.0, 410.0), Size::new(360.0, 62.0));
    /// assert!(canvas.contains(&stage));
    ///
    /// let overflow = Bounds::new_from_top_left(Point::new(30.0, 500.0), Size::new(360.0, 62.0));
    /// assert!(!canvas.contains(&overflow));
    /// ```
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(40.0, 50.0), Size::new(160.0, 88.0));
        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 50.0);
        assert_eq!(bounds.max_x(), 200.0);
        assert_eq!(bounds.max_y(), 138.0);
        assert_eq!(bounds.center(), Point::new(120.0, 94.0));
        assert_eq!(bounds.to_size(), Size::new(160.0, 88.0));
    }

    #[test]
    fn test_bounds_from_points_is_order_independent() {
        let a = Point::new(200.0, 85.0);
        let b = Point::new(320.0, 85.0);
        assert_eq!(Bounds::new_from_points(a, b), Bounds::new_from_points(b, a));
        assert_eq!(Bounds::new_from_points(a, b).height(), 0.0);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let canvas = Bounds::new_from_top_left(Point::default(), Size::new(100.0, 100.0));
        assert!(canvas.contains(&canvas));
        assert!(!canvas.contains(&Bounds::new_from_points(
            Point::new(-1.0, 0.0),
            Point::new(10.0, 10.0)
        )));
    }
}

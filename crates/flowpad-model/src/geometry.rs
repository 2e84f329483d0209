//! 2D geometry for diagram layout
//!
//! Provides [`Point`], [`Size`], and [`Bounds`] with the operations the
//! placement and viewport code needs. Coordinates are diagram-space, with
//! the y axis growing downward.

use serde::{Deserialize, Serialize};

/// Position in diagram coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset
    #[inline]
    #[must_use]
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a shape or viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Size {
    /// Create a size
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether either extent is zero or negative
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle, addressed by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner
    pub origin: Point,
    /// Extent from the origin
    pub size: Size,
}

impl Bounds {
    /// Create bounds from origin and size
    #[inline]
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create bounds from raw coordinates
    #[inline]
    #[must_use]
    pub const fn from_parts(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Right edge coordinate
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge coordinate
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Center point
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Same extent at a different origin
    #[inline]
    #[must_use]
    pub fn at(&self, origin: Point) -> Self {
        Self::new(origin, self.size)
    }

    /// Whether the interiors overlap
    ///
    /// Touching edges do not count as an intersection, so shapes laid out
    /// flush against each other are not considered overlapping.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.bottom()
            && other.origin.y < self.bottom()
    }

    /// Smallest bounds containing both rectangles
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.origin.x.min(other.origin.x);
        let y = self.origin.y.min(other.origin.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::from_parts(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_bounds() {
        let b = Bounds::from_parts(10.0, 20.0, 100.0, 80.0);
        assert_eq!(b.center(), Point::new(60.0, 60.0));
    }

    #[test]
    fn overlapping_bounds_intersect() {
        let a = Bounds::from_parts(0.0, 0.0, 100.0, 80.0);
        let b = Bounds::from_parts(50.0, 40.0, 100.0, 80.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Bounds::from_parts(0.0, 0.0, 100.0, 80.0);
        let b = Bounds::from_parts(100.0, 0.0, 100.0, 80.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn disjoint_bounds_do_not_intersect() {
        let a = Bounds::from_parts(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::from_parts(50.0, 50.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::from_parts(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::from_parts(20.0, 5.0, 10.0, 10.0);
        let u = a.union(&b);
        assert_eq!(u, Bounds::from_parts(0.0, 0.0, 30.0, 15.0));
    }

    #[test]
    fn reposition_keeps_size() {
        let b = Bounds::from_parts(0.0, 0.0, 100.0, 80.0);
        let moved = b.at(Point::new(5.0, 7.0));
        assert_eq!(moved.origin, Point::new(5.0, 7.0));
        assert_eq!(moved.size, b.size);
    }
}

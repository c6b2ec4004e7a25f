//! Plain geometry types and the rectangle tests used for hit-testing.
//!
//! All edge comparisons are inclusive: two rectangles that only touch along an
//! edge intersect, and a point on the border of a rectangle is contained by it.
//! Overlap *area* of touching rectangles is still zero.

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    /// Build a rectangle from its top-left corner and its extent.
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left.x, top_left.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// `false` only when one rectangle lies strictly to one side of the other.
    pub fn intersects(&self, other: &Rect<f32>) -> bool {
        !(self.x > other.right()
            || self.right() < other.x
            || self.y > other.bottom()
            || self.bottom() < other.y)
    }

    /// Area of the intersection, `0.0` when the clamped width or height is not positive.
    pub fn overlap_area(&self, other: &Rect<f32>) -> f32 {
        let width = self.right().min(other.right()) - self.x.max(other.x);
        let height = self.bottom().min(other.bottom()) - self.y.max(other.y);

        if width > 0.0 && height > 0.0 {
            width * height
        } else {
            0.0
        }
    }
}

/// See [`Rect::intersects`].
pub fn rectangles_intersect(a: &Rect<f32>, b: &Rect<f32>) -> bool {
    a.intersects(b)
}

/// See [`Rect::overlap_area`].
pub fn overlap_area(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    a.overlap_area(b)
}

/// See [`Rect::contains`].
pub fn point_in_rectangle(point: Vec2, rect: &Rect<f32>) -> bool {
    rect.contains(point)
}

/// Squared euclidean distance, for comparisons that don't need the root.
pub fn squared_distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance_squared(p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);

        assert_eq!(overlap_area(&a, &b), 2500.0);
        assert!(rectangles_intersect(&a, &b));
    }

    #[test]
    fn test_touching_edges_intersect_without_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert_eq!(a.overlap_area(&b), 0.0);
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);

        assert!(!a.intersects(&b));
        assert_eq!(a.overlap_area(&b), 0.0);
    }

    #[test]
    fn test_contained_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(outer.overlap_area(&inner), 1200.0);
    }

    #[test]
    fn test_point_in_rectangle_corners() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert!(point_in_rectangle(Vec2::new(0.0, 0.0), &rect));
        assert!(point_in_rectangle(Vec2::new(100.0, 0.0), &rect));
        assert!(point_in_rectangle(Vec2::new(0.0, 100.0), &rect));
        assert!(point_in_rectangle(Vec2::new(100.0, 100.0), &rect));
        assert!(!point_in_rectangle(Vec2::new(100.5, 50.0), &rect));
    }

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 10.0, 20.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(20.0, 30.0));
    }
}

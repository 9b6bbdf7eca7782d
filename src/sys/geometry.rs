use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point in screen space. The y axis grows upward, so a positive
/// vertical delta points north.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self { Point { x, y } }

    pub fn distance_to(&self, other: Point) -> f64 { (*self - other).length() }
}

impl Sub for Point {
    type Output = Delta;

    fn sub(self, rhs: Point) -> Delta { Delta { dx: self.x - rhs.x, dy: self.y - rhs.y } }
}

/// Displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub fn length(&self) -> f64 { self.dx.hypot(self.dy) }

    pub fn is_zero(&self) -> bool { self.dx == 0.0 && self.dy == 0.0 }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn min_x(&self) -> f64 { self.origin.x }

    pub fn min_y(&self) -> f64 { self.origin.y }

    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }

    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    /// Hit test for an unflipped (bottom-left origin) rectangle: the left and
    /// top edges are inside, the right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y > self.min_y()
            && point.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracting_points_gives_delta() {
        let delta = Point::new(13.0, 4.0) - Point::new(10.0, 0.0);
        assert_eq!(delta, Delta { dx: 3.0, dy: 4.0 });
        assert_eq!(delta.length(), 5.0);
        assert!(!delta.is_zero());
        assert!((Point::new(1.0, 1.0) - Point::new(1.0, 1.0)).is_zero());
    }

    #[test]
    fn contains_uses_bottom_left_origin_edges() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(0.0, 50.0)));
        assert!(rect.contains(Point::new(50.0, 25.0)));
        assert!(!rect.contains(Point::new(100.0, 25.0)));
        assert!(!rect.contains(Point::new(50.0, 0.0)));
        assert!(!rect.contains(Point::new(-1.0, 25.0)));
    }
}

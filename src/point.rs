//! Points and offsets in an unbounded 2-dimensional grid.

use std::fmt;
use std::ops::{Add, Sub};

/// A point in a 2-dimensional grid.
///
/// The `x` and `y` coordinates are signed and unbounded, so points left of or above the origin
/// are just as valid as any other. The `y` axis grows *down.*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Returns the point reached after taking `times` steps of `offset` from `self`.
    ///
    /// Coordinates wrap around at the edges of the `i32` range.
    #[must_use]
    pub fn step(self, offset: Offset, times: i32) -> Self {
        Point {
            x: self.x.wrapping_add(offset.dx.wrapping_mul(times)),
            y: self.y.wrapping_add(offset.dy.wrapping_mul(times)),
        }
    }

    /// Like [`Point::step`], but returns `None` instead of leaving the `i32` range.
    pub fn checked_step(self, offset: Offset, times: i32) -> Option<Self> {
        Some(Point {
            x: self.x.checked_add(offset.dx.checked_mul(times)?)?,
            y: self.y.checked_add(offset.dy.checked_mul(times)?)?,
        })
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Self::Output {
        self.step(rhs, 1)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Self::Output {
        self.step(rhs, -1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A relative movement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Offset { dx, dy }
    }
}

/// Left, right, up and down.
pub const ORTHOGONAL: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(0, 1),
];

/// Up-left, up-right, down-left and down-right.
pub const DIAGONAL: [Offset; 4] = [
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];

/// All eight directions of the Moore neighborhood.
pub const ALL_DIRECTIONS: [Offset; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_in_both_directions() {
        let p0 = Point::new(3, 5);
        let p1 = p0 + ORTHOGONAL[3];
        let p2 = p1 + ORTHOGONAL[0];
        assert_eq!(p2, Point::new(2, 6));
        assert_eq!(p2 - ORTHOGONAL[0], p1);
        assert_eq!(p1 - ORTHOGONAL[3], p0);
    }

    #[test]
    fn step_many_times_past_the_origin() {
        let p = Point::ORIGIN.step(Offset::new(-2, 3), 4);
        assert_eq!(p, Point::new(-8, 12));
        assert_eq!(p.to_string(), "(-8, 12)");
    }

    #[test]
    fn step_at_the_edge_of_the_range() {
        let edge = Point::new(i32::MAX, i32::MIN);
        assert_eq!(edge.checked_step(ORTHOGONAL[1], 1), None);
        assert_eq!(edge.checked_step(ORTHOGONAL[2], 1), None);
        assert_eq!(
            edge.checked_step(DIAGONAL[2], 1),
            Some(Point::new(i32::MAX - 1, i32::MIN + 1))
        );
        assert_eq!(edge + ORTHOGONAL[1], Point::new(i32::MIN, i32::MIN));
        assert_eq!(edge - ORTHOGONAL[3], Point::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn diagonals_are_distinct() {
        for (k, a) in DIAGONAL.iter().enumerate() {
            assert!(DIAGONAL[k + 1..].iter().all(|b| a != b));
            assert_ne!(a.dx, 0);
            assert_ne!(a.dy, 0);
        }
    }
}

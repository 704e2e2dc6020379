//! Geometry primitives: [`Point`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. Rows grow downward, columns grow rightward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours, in fixed order: up, down, left, right.
    ///
    /// The order is part of the pathfinding contract — reconstruction
    /// tie-breaks on it, so it must stay deterministic.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_and_ops() {
        let p = Point::new(2, 3);
        assert_eq!(p.shift(-1, 1), Point::new(1, 4));
        assert_eq!(p + Point::new(1, 1), Point::new(3, 4));
        assert_eq!(p - Point::new(2, 3), Point::ZERO);
    }

    #[test]
    fn test_neighbors_4_order() {
        let n = Point::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(4, 5), // up
                Point::new(6, 5), // down
                Point::new(5, 4), // left
                Point::new(5, 6), // right
            ]
        );
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 9), Point::new(1, 1)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 9), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(2, 27).to_string(), "(2, 27)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

use core::fmt;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An immutable grid coordinate. [Position::UNSET] marks a coordinate that was never
/// assigned; arithmetic involving it yields [None] rather than a bogus position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Sentinel for an unset coordinate.
    pub const UNSET: Position = Position {
        x: i32::MAX,
        y: i32::MAX,
    };

    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// True unless either component holds the sentinel value.
    pub fn is_set(&self) -> bool {
        self.x != i32::MAX && self.y != i32::MAX
    }

    pub fn manhattan_distance(&self, other: &Position) -> i64 {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs()
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::UNSET
    }
}

impl Add for Position {
    type Output = Option<Position>;

    fn add(self, other: Position) -> Option<Position> {
        if !self.is_set() || !other.is_set() {
            return None;
        }
        Some(Position::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }
}

impl Sub for Position {
    type Output = Option<Position>;

    fn sub(self, other: Position) -> Option<Position> {
        if !self.is_set() || !other.is_set() {
            return None;
        }
        Some(Position::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_set() {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "(unset)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_componentwise() {
        let a = Position::new(10, 20);
        let b = Position::new(5, 3);
        assert_eq!(a + b, Some(Position::new(15, 23)));
        assert_eq!(a - b, Some(Position::new(5, 17)));
    }

    #[test]
    fn sentinel_operand_gives_none() {
        let a = Position::new(4, -2);
        assert_eq!(a + Position::UNSET, None);
        assert_eq!(a - Position::UNSET, None);
        assert_eq!(Position::UNSET + a, None);
        assert_eq!(Position::UNSET - a, None);
        // A single sentinel component is enough.
        assert_eq!(a + Position::new(1, i32::MAX), None);
    }

    #[test]
    fn add_then_sub_is_identity() {
        for (ax, ay, bx, by) in [(0, 0, 1, 1), (-3, 7, 12, -9), (100, 5, -100, -5)] {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            assert_eq!((a + b).and_then(|s| s - b), Some(a));
        }
    }

    #[test]
    fn overflow_gives_none() {
        let a = Position::new(i32::MAX - 1, 0);
        assert_eq!(a + Position::new(5, 0), None);
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(Position::default(), Position::UNSET);
        assert!(!Position::default().is_set());
        assert_eq!(format!("{}", Position::UNSET), "(unset)");
    }

    #[test]
    fn ordered_by_x_then_y() {
        let mut v = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn distances() {
        let o = Position::new(0, 0);
        assert_eq!(o.manhattan_distance(&Position::new(2, -3)), 5);
        assert!((o.euclidean_distance(&Position::new(1, 1)) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(o.euclidean_distance(&Position::new(0, 1)), 1.0);
    }
}

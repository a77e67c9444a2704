//! Integer grid geometry.
//!
//! Seats live on a shared grid and every proximity rule is phrased in
//! terms of the Manhattan distance between two cells.

use std::fmt;

/// Radius of the "neighbor" rules (inclusion, alone, rivals, grouping).
pub const NEIGHBOR_RADIUS: u64 = 1;

/// Radius of the smell, noise and quiet rules.
pub const NUISANCE_RADIUS: u64 = 2;

/// A cell on the seating grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance `|ax - bx| + |ay - by|`.
///
/// Computed in `u64` so it is total over the whole `i32` grid.
///
/// # Example
///
/// ```
/// use seatforge_core::geometry::{distance, Coord};
///
/// assert_eq!(distance(Coord::new(0, 0), Coord::new(1, 1)), 2);
/// assert_eq!(distance(Coord::new(3, -2), Coord::new(3, -2)), 0);
/// ```
#[inline]
pub fn distance(a: Coord, b: Coord) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// True iff the cells are orthogonally adjacent (distance exactly 1).
#[inline]
pub fn is_neighbor(a: Coord, b: Coord) -> bool {
    distance(a, b) == NEIGHBOR_RADIUS
}

/// True iff the cells are at most two steps apart.
///
/// A cell is within nuisance range of itself; callers that pair two
/// passengers exclude the same-seat case separately.
#[inline]
pub fn is_within_nuisance_range(a: Coord, b: Coord) -> bool {
    distance(a, b) <= NUISANCE_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(distance(Coord::new(0, 0), Coord::new(1, 1)), 2);
        assert_eq!(distance(Coord::new(0, 0), Coord::new(6, 2)), 8);
    }

    #[test]
    fn test_is_neighbor() {
        assert!(is_neighbor(Coord::new(0, 0), Coord::new(0, 1)));
        assert!(!is_neighbor(Coord::new(0, 0), Coord::new(0, 0)));
        assert!(!is_neighbor(Coord::new(0, 0), Coord::new(1, 1)));
    }

    #[test]
    fn test_nuisance_range() {
        assert!(is_within_nuisance_range(Coord::new(0, 0), Coord::new(1, 1)));
        assert!(is_within_nuisance_range(Coord::new(0, 0), Coord::new(0, 2)));
        assert!(!is_within_nuisance_range(Coord::new(0, 0), Coord::new(2, 1)));
    }

    #[test]
    fn test_extreme_coordinates() {
        let a = Coord::new(i32::MIN, i32::MIN);
        let b = Coord::new(i32::MAX, i32::MAX);
        assert_eq!(distance(a, b), 2 * u64::from(u32::MAX));
    }

    fn coord() -> impl Strategy<Value = Coord> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Coord::new(x, y))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coord(), b in coord()) {
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn distance_is_zero_only_on_identity(a in coord(), b in coord()) {
            prop_assert_eq!(distance(a, b) == 0, a == b);
        }

        #[test]
        fn triangle_inequality(a in coord(), b in coord(), c in coord()) {
            prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c));
        }

        #[test]
        fn neighbors_are_in_nuisance_range(a in coord(), b in coord()) {
            if is_neighbor(a, b) {
                prop_assert!(is_within_nuisance_range(a, b));
            }
        }
    }
}

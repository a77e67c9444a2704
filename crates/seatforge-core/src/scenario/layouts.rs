//! Built-in seat layouts.

use crate::domain::{Orientation, Position, Seat};

/// Back bench of a taxi: three forward-facing seats in a column.
pub fn taxi_layout() -> Vec<Seat> {
    vec![
        Seat::new("Rank-1-1", 0, 1, Position::Window, Orientation::Forward),
        Seat::new("Rank-2-1", 0, 2, Position::Middle, Orientation::Forward),
        Seat::new("Rank-3-1", 0, 3, Position::Window, Orientation::Forward),
    ]
}

/// Limousine cabin: a back row along y = 0 and two facing side benches.
///
/// ```text
///       0   1   2   3   4   5   6
/// y=0  (W)     (M) (M) (M)     (W)
/// y=1  (M)                     (M)
/// y=2  (W)                     (W)
/// ```
pub fn limousine_layout() -> Vec<Seat> {
    vec![
        // back window row
        Seat::new("Rank-1-1", 0, 0, Position::Window, Orientation::Forward),
        Seat::new("Rank-1-2", 2, 0, Position::Middle, Orientation::Backward),
        Seat::new("Rank-1-3", 3, 0, Position::Middle, Orientation::Backward),
        Seat::new("Rank-1-4", 4, 0, Position::Middle, Orientation::Backward),
        Seat::new("Rank-1-5", 6, 0, Position::Window, Orientation::Backward),
        // left bench
        Seat::new("Rank-2-1", 0, 1, Position::Middle, Orientation::Forward),
        Seat::new("Rank-3-1", 0, 2, Position::Window, Orientation::Forward),
        // right bench
        Seat::new("Rank-2-2", 6, 1, Position::Middle, Orientation::Backward),
        Seat::new("Rank-3-2", 6, 2, Position::Window, Orientation::Backward),
    ]
}

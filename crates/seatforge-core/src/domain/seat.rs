//! Seat types.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// Unique identifier of a seat within a layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SeatId(String);

impl SeatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeatId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SeatId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SeatId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a seat sits relative to the vehicle body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Position {
    Window,
    Aisle,
    Middle,
}

impl Position {
    /// Single-letter tag used by the grid renderer.
    pub fn initial(self) -> char {
        match self {
            Position::Window => 'W',
            Position::Aisle => 'A',
            Position::Middle => 'M',
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Window => write!(f, "WINDOW"),
            Position::Aisle => write!(f, "AISLE"),
            Position::Middle => write!(f, "MIDDLE"),
        }
    }
}

/// Direction the seat faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Orientation {
    Forward,
    Backward,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Forward => write!(f, "FORWARD"),
            Orientation::Backward => write!(f, "BACKWARD"),
        }
    }
}

/// A seat attribute a passenger can insist on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatPreference {
    /// Seat position must be [`Position::Window`].
    Window,
    /// Seat orientation must be [`Orientation::Forward`].
    Forward,
}

impl SeatPreference {
    /// Returns true if the seat satisfies this preference.
    pub fn accepts(self, seat: &Seat) -> bool {
        match self {
            SeatPreference::Window => seat.position == Position::Window,
            SeatPreference::Forward => seat.orientation == Orientation::Forward,
        }
    }
}

impl fmt::Display for SeatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatPreference::Window => write!(f, "window"),
            SeatPreference::Forward => write!(f, "forward-facing"),
        }
    }
}

/// A seat on the layout grid.
///
/// # Example
///
/// ```
/// use seatforge_core::{Orientation, Position, Seat};
///
/// let seat = Seat::new("Rank-1-1", 0, 0, Position::Window, Orientation::Forward);
/// assert_eq!(seat.id, "Rank-1-1");
/// assert!(seat.is_window());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seat {
    pub id: SeatId,
    pub x: i32,
    pub y: i32,
    pub position: Position,
    pub orientation: Orientation,
}

impl Seat {
    pub fn new(
        id: impl Into<SeatId>,
        x: i32,
        y: i32,
        position: Position,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            position,
            orientation,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    pub fn is_window(&self) -> bool {
        self.position == Position::Window
    }

    pub fn is_forward(&self) -> bool {
        self.orientation == Orientation::Forward
    }
}

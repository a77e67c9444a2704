//! Scenarios: a layout plus a roster.
//!
//! The built-in layouts and levels mirror the limousine and taxi levels of
//! the game. They double as test fixtures across the workspace.

mod layouts;
mod levels;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::{Passenger, Seat};

pub use layouts::{limousine_layout, taxi_layout};
pub use levels::{london_level_1_1, london_level_1_2, london_level_1_3};

/// A named seating problem: an ordered layout and an ordered roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scenario {
    pub name: String,
    pub layout: Vec<Seat>,
    pub passengers: Vec<Passenger>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, layout: Vec<Seat>, passengers: Vec<Passenger>) -> Self {
        Self {
            name: name.into(),
            layout,
            passengers,
        }
    }

    /// Returns the built-in London level `1-<level>` on the limousine layout.
    ///
    /// # Example
    ///
    /// ```
    /// use seatforge_core::Scenario;
    ///
    /// let scenario = Scenario::london(1).unwrap();
    /// assert_eq!(scenario.layout.len(), 9);
    /// assert_eq!(scenario.passengers.len(), 8);
    /// assert!(Scenario::london(4).is_none());
    /// ```
    pub fn london(level: u32) -> Option<Self> {
        let passengers = match level {
            1 => london_level_1_1(),
            2 => london_level_1_2(),
            3 => london_level_1_3(),
            _ => return None,
        };
        Some(Self::new(
            format!("London 1-{level}"),
            limousine_layout(),
            passengers,
        ))
    }
}

//! Domain model: seats on a grid and the passengers to place on them.
//!
//! Both are plain immutable values handed to the model builder. Layouts
//! and rosters are ordered; the order is the default search order.

mod passenger;
mod seat;

pub use passenger::{Passenger, PassengerId, Relation, Trait, Traits};
pub use seat::{Orientation, Position, Seat, SeatId, SeatPreference};

#[cfg(test)]
mod tests;

//! SeatForge Core - Core types for seat assignment
//!
//! This crate provides the fundamental abstractions for SeatForge:
//! - Domain types describing seats and passengers
//! - Grid geometry used by the proximity rules
//! - The error taxonomy shared by every other crate
//! - Built-in scenario data (layouts and levels)

pub mod domain;
pub mod error;
pub mod geometry;
pub mod scenario;

pub use domain::{
    Orientation, Passenger, PassengerId, Position, Relation, Seat, SeatId, SeatPreference, Trait,
    Traits,
};
pub use error::{Result, SeatForgeError};
pub use geometry::{
    distance, is_neighbor, is_within_nuisance_range, Coord, NEIGHBOR_RADIUS, NUISANCE_RADIUS,
};
pub use scenario::Scenario;

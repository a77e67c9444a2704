//! SeatForge Model - Constraint model construction
//!
//! Turns an ordered seat layout and an ordered passenger roster into a
//! boolean constraint-satisfaction model:
//! - One assignment variable per (passenger, seat) pair
//! - Typed constraints tagged with the seating rule that produced them
//! - A per-variable occurrence index used by propagation
//!
//! Structural input errors (duplicate ids, dangling relations, missing
//! seat categories) are reported here, before any search runs.

pub mod builder;
pub mod constraint;
pub mod model;
pub mod relations;
pub mod rules;
pub mod variable;

pub use builder::ModelBuilder;
pub use constraint::{Cardinality, Constraint, ConstraintForm, ConstraintKind, Status};
pub use model::{Model, ModelSummary, Violation};
pub use relations::RelationIndex;
pub use rules::Nuisance;
pub use variable::{VarId, VariableSpace};

use seatforge_core::{Passenger, Result, Seat};

/// Builds a model with the default policies.
///
/// Shorthand for `ModelBuilder::new(layout, roster).build()`.
pub fn build_model(layout: &[Seat], roster: &[Passenger]) -> Result<Model> {
    ModelBuilder::new(layout, roster).build()
}

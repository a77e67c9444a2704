//! Error types for SeatForge

use thiserror::Error;

use crate::domain::{PassengerId, Relation, SeatId, SeatPreference};

/// Main error type for SeatForge operations.
///
/// Infeasibility is not represented here: a scenario without any valid
/// seating is an ordinary solver verdict, not a failure.
#[derive(Debug, Error)]
pub enum SeatForgeError {
    /// A relation list names a passenger that is not on the roster.
    #[error("Configuration error: passenger {passenger} lists unknown passenger {target} in `{relation}`")]
    UnknownRelation {
        passenger: PassengerId,
        target: PassengerId,
        relation: Relation,
    },

    /// A seat preference targets a category the layout does not contain.
    #[error("Configuration error: {name} (passenger {passenger}) requires a {preference} seat but the layout has none")]
    MissingSeatCategory {
        passenger: PassengerId,
        name: String,
        preference: SeatPreference,
    },

    /// Two seats share an identifier.
    #[error("Invalid layout: duplicate seat id `{0}`")]
    DuplicateSeat(SeatId),

    /// Two seats occupy the same grid cell.
    #[error("Invalid layout: seats `{first}` and `{second}` both occupy ({x}, {y})")]
    DuplicateCoordinates {
        first: SeatId,
        second: SeatId,
        x: i32,
        y: i32,
    },

    /// Two passengers share an identifier.
    #[error("Invalid roster: duplicate passenger id {0}")]
    DuplicatePassenger(PassengerId),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SeatForgeError {
    /// Returns true for errors caused by a well-formed but unsatisfiable
    /// scenario description (dangling relation, missing seat category).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SeatForgeError::UnknownRelation { .. } | SeatForgeError::MissingSeatCategory { .. }
        )
    }

    /// Returns true for structural violations of the input invariants.
    pub fn is_invariant_violation(&self) -> bool {
        !self.is_configuration()
    }
}

/// Result type alias for SeatForge operations
pub type Result<T> = std::result::Result<T, SeatForgeError>;

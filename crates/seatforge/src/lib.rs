//! SeatForge - A seating constraint solver in Rust
//!
//! One call seats a roster on a layout, or proves that no seating keeps
//! everyone happy.
//!
//! # Example
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let layout = taxi_layout();
//! let roster = vec![
//!     Passenger::new(1, "Mia").with(Trait::PrefersWindow),
//!     Passenger::new(2, "Leo"),
//! ];
//!
//! let result = solve_seating(&layout, &roster).unwrap();
//! let plan = result.plan().unwrap();
//! assert_eq!(plan.len(), 2);
//! print!("{}", render_grid(&layout, Some(plan)));
//! ```

#[cfg(feature = "console")]
pub mod console;
pub mod render;
#[cfg(feature = "serde")]
pub mod scenario;
mod solver;

pub use render::render_grid;
#[cfg(feature = "serde")]
pub use scenario::{load_scenario, ScenarioError};
pub use solver::{solve_seating, solve_seating_with};

pub use seatforge_config::SolverConfig;
pub use seatforge_core::{
    Orientation, Passenger, PassengerId, Position, Result, Scenario, Seat, SeatForgeError, SeatId,
    Trait,
};
pub use seatforge_model::{build_model, Model, ModelBuilder};
pub use seatforge_solver::{
    solve_batch, SeatingPlan, SeatingSolver, SolveResult, SolverStats, TerminationReason, Verdict,
};

pub mod prelude {
    pub use super::{render_grid, solve_seating, solve_seating_with};
    pub use super::{Orientation, Passenger, PassengerId, Position, Scenario, Seat, SeatId, Trait};
    pub use super::{SeatingPlan, SeatingSolver, SolveResult, SolverConfig, Verdict};
    pub use seatforge_core::scenario::{limousine_layout, taxi_layout};
}

#[cfg(test)]
mod tests;

//! SeatForge Solver - Search engine
//!
//! This crate provides:
//! - Backtracking search with unit propagation over a [`Model`](seatforge_model::Model)
//! - Termination conditions (time, decisions, backtracks, external flag)
//! - The seating verdict and plan projection
//! - Parallel solving of independent scenarios

pub mod batch;
pub mod scope;
mod search;
pub mod solver;
pub mod stats;
pub mod termination;
pub mod verdict;

pub use batch::solve_batch;
pub use scope::SolverScope;
pub use solver::SeatingSolver;
pub use stats::SolverStats;
pub use termination::{
    BacktrackCountTermination, ExternalTermination, NoTermination, OrTermination,
    StepCountTermination, Termination, TimeTermination,
};
pub use verdict::{SeatingPlan, SolveResult, TerminationReason, Verdict};

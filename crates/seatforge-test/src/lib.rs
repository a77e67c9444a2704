//! Shared test fixtures for SeatForge crates.
//!
//! This crate depends on `seatforge-core` only, so every other crate can
//! use it as a dev-dependency without cycles.
//!
//! - [`fixtures`] - small hand-built layouts and the A-D reference scenarios
//! - [`checker`] - re-verifies a seating plan against the domain rules
//! - [`strategies`] - `proptest` generators for random small scenarios
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! seatforge-test = { workspace = true }
//! ```

pub mod checker;
pub mod fixtures;
pub mod strategies;

pub use checker::{check_plan, PlanViolation};
pub use fixtures::{line_layout, passenger, scenario_a, scenario_b, scenario_c, scenario_d};

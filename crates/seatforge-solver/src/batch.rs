//! Parallel solving of independent scenarios.

use rayon::prelude::*;
use seatforge_config::SolverConfig;
use seatforge_core::{Result, Scenario};
use tracing::info;

use crate::solver::SeatingSolver;
use crate::verdict::SolveResult;

/// Solves every scenario with its own model and search state.
///
/// Results come back in input order.
///
/// # Example
///
/// ```
/// use seatforge_config::SolverConfig;
/// use seatforge_core::Scenario;
/// use seatforge_solver::solve_batch;
///
/// let scenarios: Vec<Scenario> = (1..=3).filter_map(Scenario::london).collect();
/// let results = solve_batch(&scenarios, &SolverConfig::default());
/// assert_eq!(results.len(), 3);
/// ```
pub fn solve_batch(scenarios: &[Scenario], config: &SolverConfig) -> Vec<Result<SolveResult>> {
    info!(event = "batch_start", scenario_count = scenarios.len());
    scenarios
        .par_iter()
        .map(|scenario| {
            let result =
                SeatingSolver::new(config.clone()).solve(&scenario.layout, &scenario.passengers);
            if let Ok(result) = &result {
                info!(
                    event = "batch_item_end",
                    scenario = %scenario.name,
                    verdict = %result.verdict,
                );
            }
            result
        })
        .collect()
}

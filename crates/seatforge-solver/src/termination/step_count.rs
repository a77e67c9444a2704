//! Step count termination.

use super::Termination;
use crate::scope::SolverScope;
use crate::verdict::TerminationReason;

/// Terminates after a number of decisions.
///
/// # Example
///
/// ```
/// use seatforge_solver::termination::StepCountTermination;
///
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (solver_scope.total_step_count() >= self.limit).then_some(TerminationReason::StepLimit)
    }
}

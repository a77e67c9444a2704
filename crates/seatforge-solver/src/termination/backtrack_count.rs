//! Backtrack count termination.

use super::Termination;
use crate::scope::SolverScope;
use crate::verdict::TerminationReason;

/// Terminates after a number of backtracks.
#[derive(Debug, Clone)]
pub struct BacktrackCountTermination {
    limit: u64,
}

impl BacktrackCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for BacktrackCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (solver_scope.backtrack_count() >= self.limit).then_some(TerminationReason::BacktrackLimit)
    }
}

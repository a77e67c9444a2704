//! Termination conditions for the search.
//!
//! A termination is consulted before every search step. When it fires the
//! search stops with [`Verdict::Terminated`](crate::Verdict::Terminated)
//! carrying the returned reason.

mod backtrack_count;
mod composite;
mod external;
mod step_count;
mod time;

use std::fmt::Debug;

use seatforge_config::TerminationConfig;

use crate::scope::SolverScope;
use crate::verdict::TerminationReason;

pub use backtrack_count::BacktrackCountTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Sync + Debug {
    /// Returns the reason to stop, if any.
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason>;

    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.check(solver_scope).is_some()
    }
}

/// Marker type indicating no termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn check(&self, _solver_scope: &SolverScope) -> Option<TerminationReason> {
        None
    }
}

impl<T: Termination> Termination for Option<T> {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(solver_scope))
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (**self).check(solver_scope)
    }
}

/// The bounds a [`TerminationConfig`] can express.
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<StepCountTermination>,
    Option<BacktrackCountTermination>,
)>;

/// Builds the termination described by the configuration.
///
/// Absent configuration means no bound.
pub fn from_config(config: Option<&TerminationConfig>) -> ConfiguredTermination {
    let Some(config) = config else {
        return OrTermination((None, None, None));
    };
    OrTermination((
        config.time_limit().map(TimeTermination::new),
        config.step_count_limit.map(StepCountTermination::new),
        config.backtrack_count_limit.map(BacktrackCountTermination::new),
    ))
}

#[cfg(test)]
mod tests;

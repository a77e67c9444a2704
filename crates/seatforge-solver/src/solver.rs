//! Solver implementation.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use seatforge_config::{EnvironmentMode, SolverConfig};
use seatforge_core::{Passenger, Result, Seat};
use seatforge_model::{Model, ModelBuilder};
use tracing::{debug, info};

use crate::scope::SolverScope;
use crate::search;
use crate::termination::{self, ConfiguredTermination, OrTermination, Termination};
use crate::verdict::{SolveResult, TerminationReason};

/// Seats a roster on a layout.
///
/// A solver can be reused for any number of solves. Solves on one solver
/// share its early-termination flag, so run concurrent solves on separate
/// solvers (see [`solve_batch`](crate::solve_batch)).
///
/// # Example
///
/// ```
/// use seatforge_core::scenario::taxi_layout;
/// use seatforge_core::{Passenger, Trait};
/// use seatforge_solver::SeatingSolver;
///
/// let layout = taxi_layout();
/// let roster = vec![
///     Passenger::new(1, "Ana").with(Trait::PrefersWindow),
///     Passenger::new(2, "Ben").with(Trait::WantsToBeAlone),
/// ];
///
/// let result = SeatingSolver::default().solve(&layout, &roster).unwrap();
/// let plan = result.plan().unwrap();
/// assert_eq!(plan.len(), 2);
/// ```
pub struct SeatingSolver<T = ConfiguredTermination> {
    config: SolverConfig,
    termination: T,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
}

impl<T: Debug> Debug for SeatingSolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingSolver")
            .field("config", &self.config)
            .field("termination", &self.termination)
            .finish()
    }
}

impl SeatingSolver {
    /// Creates a solver whose termination follows `config.termination`.
    pub fn new(config: SolverConfig) -> Self {
        let termination = termination::from_config(config.termination.as_ref());
        Self {
            config,
            termination,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SeatingSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<T: Termination> SeatingSolver<T> {
    /// Adds a termination on top of the configured ones.
    pub fn with_termination<U: Termination>(
        self,
        termination: U,
    ) -> SeatingSolver<OrTermination<(T, U)>> {
        SeatingSolver {
            config: self.config,
            termination: OrTermination((self.termination, termination)),
            terminate_early_flag: self.terminate_early_flag,
            solving: self.solving,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Requests early termination of a running solve.
    ///
    /// Thread-safe. Returns false if no solve is running.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Builds the model for `layout` and `roster`, then searches it.
    ///
    /// # Errors
    ///
    /// Configuration and invariant errors from model construction, or
    /// [`SeatForgeError::Internal`](seatforge_core::SeatForgeError::Internal)
    /// if the search produced an assignment that fails verification.
    pub fn solve(&self, layout: &[Seat], roster: &[Passenger]) -> Result<SolveResult> {
        let model = ModelBuilder::new(layout, roster)
            .with_config(&self.config.model)
            .build()?;
        self.solve_model(&model)
    }

    /// Searches a prebuilt model.
    pub fn solve_model(&self, model: &Model) -> Result<SolveResult> {
        // Clear stale requests before accepting new ones.
        self.terminate_early_flag.store(false, Ordering::SeqCst);
        self.solving.store(true, Ordering::SeqCst);

        let mut scope = match (self.config.random_seed, self.config.environment_mode) {
            (Some(seed), _) => SolverScope::with_seed(seed),
            (None, EnvironmentMode::NonReproducible) => SolverScope::new(),
            (None, _) => SolverScope::with_seed(0),
        };
        scope.set_terminate_early_flag(self.terminate_early_flag.clone());
        scope.start_solving();

        info!(
            event = "solve_start",
            passenger_count = model.passenger_count(),
            seat_count = model.seat_count(),
            constraint_count = model.constraints().len(),
        );
        debug!(event = "model_summary", summary = %model.summary());

        let cancel = CancelTermination;
        let outcome = search::run(
            model,
            &self.config,
            &OrTermination((&cancel, &self.termination)),
            &mut scope,
        );
        self.solving.store(false, Ordering::SeqCst);

        let verdict = outcome?;
        let stats = scope.into_stats();
        info!(
            event = "solve_end",
            verdict = %verdict,
            decisions = stats.decisions,
            backtracks = stats.backtracks,
            propagations = stats.propagations,
            conflicts = stats.conflicts,
            max_depth = stats.max_depth,
            elapsed_ms = stats.elapsed().as_millis() as u64,
        );
        Ok(SolveResult { verdict, stats })
    }
}

/// Fires when [`SeatingSolver::terminate_early`] was called.
#[derive(Debug)]
struct CancelTermination;

impl Termination for CancelTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        solver_scope
            .is_terminate_early()
            .then_some(TerminationReason::Cancelled)
    }
}

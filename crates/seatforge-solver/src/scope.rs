//! Solver-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::stats::SolverStats;

/// State shared by the search loop and the termination conditions for the
/// duration of one solve.
#[derive(Debug)]
pub struct SolverScope {
    stats: SolverStats,
    rng: ChaCha8Rng,
    depth: usize,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

impl SolverScope {
    /// Creates a scope with an OS-seeded random generator.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            stats: SolverStats::default(),
            rng,
            depth: 0,
            terminate_early_flag: None,
        }
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    /// True once another thread asked the solve to stop.
    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    pub fn start_solving(&mut self) {
        self.stats.start();
        self.depth = 0;
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Decisions taken so far.
    pub fn total_step_count(&self) -> u64 {
        self.stats.decisions
    }

    pub fn backtrack_count(&self) -> u64 {
        self.stats.backtracks
    }

    /// Current decision stack depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Stops the clock and returns the collected statistics.
    pub fn into_stats(mut self) -> SolverStats {
        self.stats.finish();
        self.stats
    }
}

impl Default for SolverScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_scopes_agree() {
        let mut a = SolverScope::with_seed(7);
        let mut b = SolverScope::with_seed(7);
        let xs: Vec<u32> = (0..4).map(|_| a.rng().random()).collect();
        let ys: Vec<u32> = (0..4).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_terminate_early_flag() {
        let mut scope = SolverScope::with_seed(0);
        assert!(!scope.is_terminate_early());

        let flag = Arc::new(AtomicBool::new(false));
        scope.set_terminate_early_flag(flag.clone());
        assert!(!scope.is_terminate_early());
        flag.store(true, Ordering::SeqCst);
        assert!(scope.is_terminate_early());
    }
}

//! Search statistics.

use std::time::{Duration, Instant};

/// Counters collected during one solve.
///
/// # Example
///
/// ```
/// use seatforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_decision(1);
/// stats.record_decision(2);
/// stats.record_backtrack();
///
/// assert_eq!(stats.decisions, 2);
/// assert_eq!(stats.backtracks, 1);
/// assert_eq!(stats.max_depth, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    finished: Option<Duration>,
    /// Tentative seatings tried.
    pub decisions: u64,
    /// Passengers whose candidate seats ran out.
    pub backtracks: u64,
    /// Variables fixed by propagation rather than by a decision.
    pub propagations: u64,
    /// Propagation passes that ended in a violated constraint.
    pub conflicts: u64,
    /// Deepest decision stack reached.
    pub max_depth: usize,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finished = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finished = Some(self.elapsed());
    }

    /// Time since [`start`](Self::start), or the frozen time once finished.
    pub fn elapsed(&self) -> Duration {
        self.finished
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_decision(&mut self, depth: usize) {
        self.decisions += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_propagation(&mut self) {
        self.propagations += 1;
    }

    pub fn record_conflict(&mut self) {
        self.conflicts += 1;
    }

    /// Decisions per second.
    pub fn decisions_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.decisions as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = SolverStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        stats.start();
        stats.finish();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
    }

    #[test]
    fn test_counters() {
        let mut stats = SolverStats::default();
        stats.record_propagation();
        stats.record_propagation();
        stats.record_conflict();
        assert_eq!(stats.propagations, 2);
        assert_eq!(stats.conflicts, 1);
        assert_eq!(stats.decisions_per_second(), 0.0);
    }
}

//! Solve outcomes and the seating plan projected from a solution.

use std::fmt;

use seatforge_core::{PassengerId, Result, SeatForgeError, SeatId};
use seatforge_model::Model;

use crate::stats::SolverStats;

/// Why a bounded search stopped without a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    TimeLimit,
    StepLimit,
    BacktrackLimit,
    /// Stopped from another thread.
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationReason::TimeLimit => "time limit reached",
            TerminationReason::StepLimit => "step limit reached",
            TerminationReason::BacktrackLimit => "backtrack limit reached",
            TerminationReason::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Passenger to seat mapping, one entry per passenger in roster order.
///
/// # Example
///
/// ```
/// use seatforge_core::{PassengerId, SeatId};
/// use seatforge_solver::SeatingPlan;
///
/// let plan = SeatingPlan::new(vec![
///     (PassengerId(1), SeatId::from("Rank-1-1")),
///     (PassengerId(2), SeatId::from("Rank-3-1")),
/// ]);
///
/// assert_eq!(plan.seat_of(PassengerId(2)).map(SeatId::as_str), Some("Rank-3-1"));
/// assert_eq!(plan.occupant_of("Rank-1-1"), Some(PassengerId(1)));
/// assert_eq!(plan.occupant_of("Rank-2-1"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatingPlan {
    assignments: Vec<(PassengerId, SeatId)>,
}

impl SeatingPlan {
    pub fn new(assignments: Vec<(PassengerId, SeatId)>) -> Self {
        Self { assignments }
    }

    /// Reads the plan off a total assignment of `model`'s variables.
    ///
    /// # Errors
    ///
    /// [`SeatForgeError::Internal`] if a passenger has no true variable.
    pub fn project(model: &Model, values: &[bool]) -> Result<Self> {
        let space = model.space();
        let mut assignments = Vec::with_capacity(model.passenger_count());
        for p in 0..model.passenger_count() {
            let seat = space
                .passenger_vars(p)
                .find(|v| values.get(v.index()).copied().unwrap_or(false))
                .map(|v| space.seat_of(v))
                .ok_or_else(|| {
                    SeatForgeError::Internal(format!(
                        "passenger {} has no seat in the solution",
                        model.passenger_id(p)
                    ))
                })?;
            assignments.push((model.passenger_id(p), model.seat_id(seat).clone()));
        }
        Ok(Self { assignments })
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, &SeatId)> {
        self.assignments.iter().map(|(p, s)| (*p, s))
    }

    pub fn seat_of(&self, passenger: PassengerId) -> Option<&SeatId> {
        self.assignments
            .iter()
            .find(|(p, _)| *p == passenger)
            .map(|(_, s)| s)
    }

    pub fn occupant_of(&self, seat: &str) -> Option<PassengerId> {
        self.assignments
            .iter()
            .find(|(_, s)| s.as_str() == seat)
            .map(|(p, _)| *p)
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A verified seating of every passenger. Empty for an empty roster.
    Feasible(SeatingPlan),
    /// No seating satisfies every rule.
    Infeasible,
    /// A configured bound stopped the search first.
    Terminated(TerminationReason),
}

impl Verdict {
    pub fn plan(&self) -> Option<&SeatingPlan> {
        match self {
            Verdict::Feasible(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_plan(self) -> Option<SeatingPlan> {
        match self {
            Verdict::Feasible(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Verdict::Feasible(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Verdict::Infeasible)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Feasible(plan) => write!(f, "feasible ({} seated)", plan.len()),
            Verdict::Infeasible => f.write_str("infeasible"),
            Verdict::Terminated(reason) => write!(f, "terminated ({reason})"),
        }
    }
}

/// A verdict together with the statistics of the search that produced it.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub verdict: Verdict,
    pub stats: SolverStats,
}

impl SolveResult {
    pub fn plan(&self) -> Option<&SeatingPlan> {
        self.verdict.plan()
    }
}

//! Backtracking search with unit propagation.
//!
//! The search seats one passenger per decision. Each decision is followed
//! by propagation to a fixpoint; a conflict moves on to the passenger's
//! next candidate seat, and an exhausted passenger pops its frame. The
//! decision stack is explicit, so its depth is bounded by the roster size
//! rather than by the call stack.

mod order;
mod propagate;
mod trail;

use seatforge_config::SolverConfig;
use seatforge_core::{Result, SeatForgeError};
use seatforge_model::Model;
use tracing::{debug, trace};

use crate::scope::SolverScope;
use crate::termination::Termination;
use crate::verdict::{SeatingPlan, Verdict};

use order::Candidates;
use trail::Trail;

/// One level of the decision stack.
struct Frame {
    passenger: usize,
    candidates: Candidates,
    cursor: usize,
    /// Trail length before any of this frame's decisions.
    mark: usize,
}

/// Runs the search for `model` to a verdict.
///
/// # Errors
///
/// [`SeatForgeError::Internal`] if a propagated state or a final
/// assignment fails the model check.
pub(crate) fn run<T: Termination + ?Sized>(
    model: &Model,
    config: &SolverConfig,
    termination: &T,
    scope: &mut SolverScope,
) -> Result<Verdict> {
    let search = &config.search;
    let asserted = config.environment_mode.is_asserted();
    let mut trail = Trail::new(model.space().len());

    if let Err(conflict) = propagate::propagate_all(model, &mut trail, scope.stats_mut()) {
        scope.stats_mut().record_conflict();
        debug!(
            event = "root_conflict",
            constraint = conflict.index,
            kind = %conflict.kind,
        );
        return Ok(Verdict::Infeasible);
    }
    if asserted {
        assert_consistent(model, &trail)?;
    }

    let mut stack: Vec<Frame> = Vec::with_capacity(model.passenger_count());
    match order::select_passenger(model, &trail, search.passenger_order) {
        None => return finish(model, &trail),
        Some(passenger) => stack.push(Frame {
            passenger,
            candidates: order::candidate_seats(model, &trail, passenger, search.value_order, scope),
            cursor: 0,
            mark: trail.mark(),
        }),
    }

    loop {
        if let Some(reason) = termination.check(scope) {
            debug!(event = "search_terminated", reason = %reason);
            return Ok(Verdict::Terminated(reason));
        }
        let depth = stack.len();
        scope.set_depth(depth);
        let Some(frame) = stack.last_mut() else {
            return Ok(Verdict::Infeasible);
        };
        trail.undo_to(frame.mark);

        let space = model.space();
        let passenger = frame.passenger;
        let next = frame.candidates[frame.cursor..]
            .iter()
            .position(|&s| trail.value(space.var(passenger, s)).is_none());
        let Some(offset) = next else {
            debug!(
                event = "backtrack",
                passenger = %model.passenger_id(passenger),
                depth,
            );
            scope.stats_mut().record_backtrack();
            stack.pop();
            continue;
        };
        let seat = frame.candidates[frame.cursor + offset];
        frame.cursor += offset + 1;

        scope.stats_mut().record_decision(depth);
        trace!(
            event = "decide",
            passenger = %model.passenger_id(passenger),
            seat = %model.seat_id(seat),
            depth,
        );
        trail.assign(space.var(passenger, seat), true);
        if let Err(conflict) = propagate::propagate(model, &mut trail, scope.stats_mut()) {
            scope.stats_mut().record_conflict();
            trace!(
                event = "conflict",
                constraint = conflict.index,
                kind = %conflict.kind,
            );
            continue;
        }
        if asserted {
            assert_consistent(model, &trail)?;
        }

        match order::select_passenger(model, &trail, search.passenger_order) {
            None => return finish(model, &trail),
            Some(next) => {
                let candidates =
                    order::candidate_seats(model, &trail, next, search.value_order, scope);
                let mark = trail.mark();
                stack.push(Frame {
                    passenger: next,
                    candidates,
                    cursor: 0,
                    mark,
                });
            }
        }
    }
}

/// Verifies the complete assignment and projects it to a plan.
fn finish(model: &Model, trail: &Trail) -> Result<Verdict> {
    let values = trail.to_total();
    if let Err(violation) = model.check(&values) {
        return Err(SeatForgeError::Internal(format!(
            "search produced an invalid assignment: {violation}"
        )));
    }
    Ok(Verdict::Feasible(SeatingPlan::project(model, &values)?))
}

fn assert_consistent(model: &Model, trail: &Trail) -> Result<()> {
    match propagate::find_violated(model, trail) {
        None => Ok(()),
        Some(index) => Err(SeatForgeError::Internal(format!(
            "propagation fixpoint violates {}",
            model.constraints()[index]
        ))),
    }
}

#[cfg(test)]
mod tests;

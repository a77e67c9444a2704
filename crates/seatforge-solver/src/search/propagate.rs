//! Unit propagation over the constraint forms.

use seatforge_model::{Cardinality, ConstraintForm, ConstraintKind, Model, Status, VarId};

use super::trail::Trail;
use crate::stats::SolverStats;

/// A constraint found violated during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Conflict {
    pub index: usize,
    pub kind: ConstraintKind,
}

/// Revises every constraint once, then propagates to a fixpoint.
pub(crate) fn propagate_all(
    model: &Model,
    trail: &mut Trail,
    stats: &mut SolverStats,
) -> Result<(), Conflict> {
    for index in 0..model.constraints().len() {
        revise(model, index, trail, stats)?;
    }
    propagate(model, trail, stats)
}

/// Propagates every pending assignment to a fixpoint.
pub(crate) fn propagate(
    model: &Model,
    trail: &mut Trail,
    stats: &mut SolverStats,
) -> Result<(), Conflict> {
    while let Some(var) = trail.next_pending() {
        for &index in model.watches(var) {
            if let Err(conflict) = revise(model, index, trail, stats) {
                trail.clear_pending();
                return Err(conflict);
            }
        }
    }
    Ok(())
}

/// The first constraint no completion of the trail can satisfy.
pub(crate) fn find_violated(model: &Model, trail: &Trail) -> Option<usize> {
    model
        .constraints()
        .iter()
        .position(|c| c.evaluate(|v| trail.value(v)) == Status::Violated)
}

fn force(trail: &mut Trail, var: VarId, value: bool, stats: &mut SolverStats) {
    trail.assign(var, value);
    stats.record_propagation();
}

/// Fixes every variable the constraint determines under the current trail.
fn revise(
    model: &Model,
    index: usize,
    trail: &mut Trail,
    stats: &mut SolverStats,
) -> Result<(), Conflict> {
    let constraint = &model.constraints()[index];
    let conflict = Conflict {
        index,
        kind: constraint.kind,
    };
    match &constraint.form {
        ConstraintForm::Cardinality { bound, vars } => {
            let mut trues = 0usize;
            let mut open = 0usize;
            let mut last_open = None;
            for &v in vars {
                match trail.value(v) {
                    Some(true) => trues += 1,
                    None => {
                        open += 1;
                        last_open = Some(v);
                    }
                    Some(false) => {}
                }
            }
            if trues > 1 {
                return Err(conflict);
            }
            if trues == 1 {
                if open > 0 {
                    for &v in vars {
                        if trail.value(v).is_none() {
                            force(trail, v, false, stats);
                        }
                    }
                }
            } else if *bound == Cardinality::ExactlyOne {
                match (open, last_open) {
                    (0, _) => return Err(conflict),
                    (1, Some(v)) => force(trail, v, true, stats),
                    _ => {}
                }
            }
        }
        ConstraintForm::Exclusion { a, b } => match (trail.value(*a), trail.value(*b)) {
            (Some(true), Some(true)) => return Err(conflict),
            (Some(true), None) => force(trail, *b, false, stats),
            (None, Some(true)) => force(trail, *a, false, stats),
            _ => {}
        },
        ConstraintForm::Inclusion { trigger, support } => {
            let state = trail.value(*trigger);
            if state == Some(false) {
                return Ok(());
            }
            let mut open = 0usize;
            let mut last_open = None;
            for &v in support {
                match trail.value(v) {
                    Some(true) => return Ok(()),
                    None => {
                        open += 1;
                        last_open = Some(v);
                    }
                    Some(false) => {}
                }
            }
            match (state, open, last_open) {
                (Some(true), 0, _) => return Err(conflict),
                (None, 0, _) => force(trail, *trigger, false, stats),
                (Some(true), 1, Some(v)) => force(trail, v, true, stats),
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_model::build_model;
    use seatforge_test::{line_layout, passenger, scenario_c};
    use seatforge_core::Trait;

    #[test]
    fn test_root_propagation_detects_scenario_c() {
        let s = scenario_c();
        let model = build_model(&s.layout, &s.passengers).unwrap();
        let mut trail = Trail::new(model.space().len());
        let mut stats = SolverStats::default();

        // Propagation alone cannot refute it; a decision is required.
        assert!(propagate_all(&model, &mut trail, &mut stats).is_ok());

        trail.assign(model.space().var(0, 0), true);
        let conflict = propagate(&model, &mut trail, &mut stats).unwrap_err();
        assert!(matches!(
            conflict.kind,
            ConstraintKind::Coverage | ConstraintKind::Capacity | ConstraintKind::NeighborExclusion
        ));
    }

    #[test]
    fn test_lone_talkative_is_refuted_at_root() {
        let roster = vec![passenger(1, &[Trait::Talkative])];
        let model = build_model(&line_layout(3), &roster).unwrap();
        let mut trail = Trail::new(model.space().len());
        let mut stats = SolverStats::default();

        let conflict = propagate_all(&model, &mut trail, &mut stats).unwrap_err();
        assert_eq!(conflict.kind, ConstraintKind::Coverage);
        assert!(stats.propagations >= 3);
    }

    #[test]
    fn test_decision_forces_capacity_and_coverage() {
        let roster = vec![passenger(1, &[]), passenger(2, &[])];
        let model = build_model(&line_layout(2), &roster).unwrap();
        let space = *model.space();
        let mut trail = Trail::new(space.len());
        let mut stats = SolverStats::default();

        propagate_all(&model, &mut trail, &mut stats).unwrap();
        trail.assign(space.var(0, 0), true);
        propagate(&model, &mut trail, &mut stats).unwrap();

        assert_eq!(trail.value(space.var(0, 1)), Some(false));
        assert_eq!(trail.value(space.var(1, 0)), Some(false));
        assert_eq!(trail.value(space.var(1, 1)), Some(true));
        assert_eq!(find_violated(&model, &trail), None);
    }
}

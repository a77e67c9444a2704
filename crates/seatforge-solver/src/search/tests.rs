use seatforge_config::{EnvironmentMode, MissingCategoryPolicy, PassengerOrder, SolverConfig};
use seatforge_core::{Passenger, Seat, Trait};
use seatforge_model::{build_model, ModelBuilder};
use seatforge_test::{line_layout, passenger, scenario_c, scenario_d};

use super::*;
use crate::termination::{NoTermination, StepCountTermination};
use crate::verdict::TerminationReason;

fn solve(layout: &[Seat], roster: &[Passenger], config: &SolverConfig) -> (Verdict, SolverScope) {
    let model = build_model(layout, roster).unwrap();
    let mut scope = SolverScope::with_seed(0);
    scope.start_solving();
    let verdict = run(&model, config, &NoTermination, &mut scope).unwrap();
    (verdict, scope)
}

#[test]
fn test_empty_roster_is_feasible_with_empty_plan() {
    let (verdict, _) = solve(&line_layout(3), &[], &SolverConfig::default());
    let plan = verdict.plan().unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_no_seats_is_infeasible() {
    let (verdict, scope) = solve(&[], &[passenger(1, &[])], &SolverConfig::default());
    assert_eq!(verdict, Verdict::Infeasible);
    assert_eq!(scope.stats().decisions, 0);
}

#[test]
fn test_more_passengers_than_seats_is_infeasible() {
    let roster: Vec<_> = (1..=4).map(|id| passenger(id, &[])).collect();
    let (verdict, scope) = solve(&line_layout(3), &roster, &SolverConfig::default());
    assert_eq!(verdict, Verdict::Infeasible);
    assert!(scope.stats().backtracks > 0);
}

#[test]
fn test_scenario_c_needs_backtracking() {
    let s = scenario_c();
    let (verdict, scope) = solve(&s.layout, &s.passengers, &SolverConfig::default());
    assert!(verdict.is_infeasible());
    assert_eq!(scope.stats().decisions, 2);
    assert_eq!(scope.stats().conflicts, 2);
}

#[test]
fn test_degenerate_preference_is_infeasible_without_search() {
    let s = scenario_d();
    let model = ModelBuilder::new(&s.layout, &s.passengers)
        .with_missing_category(MissingCategoryPolicy::Infeasible)
        .build()
        .unwrap();
    let mut scope = SolverScope::with_seed(0);
    let verdict = run(&model, &SolverConfig::default(), &NoTermination, &mut scope).unwrap();
    assert_eq!(verdict, Verdict::Infeasible);
    assert_eq!(scope.stats().decisions, 0);
}

#[test]
fn test_depth_is_bounded_by_roster() {
    let roster: Vec<_> = (1..=5)
        .map(|id| passenger(id, &[Trait::WantsToBeAlone]))
        .collect();
    let (verdict, scope) = solve(&line_layout(9), &roster, &SolverConfig::default());
    let plan = verdict.plan().unwrap();
    let seats: Vec<&str> = plan.iter().map(|(_, s)| s.as_str()).collect();
    assert_eq!(seats, vec!["S1", "S3", "S5", "S7", "S9"]);
    assert!(scope.stats().max_depth <= roster.len());
}

#[test]
fn test_full_assert_mode_agrees() {
    let s = seatforge_core::Scenario::london(2).unwrap();
    let plain = SolverConfig::default();
    let asserted = SolverConfig::default().with_environment_mode(EnvironmentMode::FullAssert);

    let (a, _) = solve(&s.layout, &s.passengers, &plain);
    let (b, _) = solve(&s.layout, &s.passengers, &asserted);
    assert_eq!(a, b);
}

#[test]
fn test_orders_agree_on_feasibility() {
    for level in 1..=3 {
        let s = seatforge_core::Scenario::london(level).unwrap();
        let roster_order = SolverConfig::default();
        let fewest = SolverConfig::default().with_passenger_order(PassengerOrder::FewestCandidates);

        let (a, _) = solve(&s.layout, &s.passengers, &roster_order);
        let (b, _) = solve(&s.layout, &s.passengers, &fewest);
        assert_eq!(a.is_feasible(), b.is_feasible(), "level 1-{level}");
    }
}

#[test]
fn test_step_limit_stops_search() {
    let roster: Vec<_> = (1..=5)
        .map(|id| passenger(id, &[Trait::WantsToBeAlone]))
        .collect();
    let model = build_model(&line_layout(9), &roster).unwrap();
    let mut scope = SolverScope::with_seed(0);
    scope.start_solving();
    let verdict = run(
        &model,
        &SolverConfig::default(),
        &StepCountTermination::new(2),
        &mut scope,
    )
    .unwrap();
    assert_eq!(verdict, Verdict::Terminated(TerminationReason::StepLimit));
    assert_eq!(scope.stats().decisions, 2);
}

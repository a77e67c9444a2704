use seatforge_config::MissingCategoryPolicy;
use seatforge_test::{check_plan, scenario_a, scenario_b, scenario_c, scenario_d};

use super::prelude::*;
use super::SeatForgeError;

#[test]
fn test_solve_seating_places_window_passenger() {
    let s = scenario_a();
    let result = solve_seating(&s.layout, &s.passengers).unwrap();
    let plan = result.plan().unwrap();
    assert!(check_plan(&s.layout, &s.passengers, plan.iter()).is_empty());
    assert_eq!(plan.occupant_of("W"), Some(PassengerId(1)));
}

#[test]
fn test_rendered_plan_shows_occupants() {
    let s = scenario_b();
    let result = solve_seating_with(SolverConfig::default(), &s.layout, &s.passengers).unwrap();
    let grid = render_grid(&s.layout, result.plan());
    assert!(grid.contains("P1"));
    assert!(grid.contains("P2"));
    assert!(grid.contains("(M)"));
}

#[test]
fn test_infeasible_is_not_an_error() {
    let s = scenario_c();
    let result = solve_seating_with(SolverConfig::default(), &s.layout, &s.passengers).unwrap();
    assert_eq!(result.verdict, Verdict::Infeasible);
    assert!(result.plan().is_none());
}

#[test]
fn test_missing_window_policies() {
    let s = scenario_d();
    let err = solve_seating_with(SolverConfig::default(), &s.layout, &s.passengers).unwrap_err();
    assert!(matches!(err, SeatForgeError::MissingSeatCategory { .. }));

    let lenient = SolverConfig::default().with_missing_category(MissingCategoryPolicy::Infeasible);
    let result = solve_seating_with(lenient, &s.layout, &s.passengers).unwrap();
    assert!(result.verdict.is_infeasible());
}

#[test]
fn test_london_plans_render() {
    let s = Scenario::london(1).unwrap();
    let result = solve_seating(&s.layout, &s.passengers).unwrap();
    if let Some(plan) = result.plan() {
        let grid = render_grid(&s.layout, Some(plan));
        assert_eq!(grid.matches('P').count(), s.passengers.len());
    }
}

//! Integration tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use seatforge_config::TerminationConfig;

use super::*;
use crate::scope::SolverScope;
use crate::verdict::TerminationReason;

fn scope() -> SolverScope {
    let mut scope = SolverScope::with_seed(0);
    scope.start_solving();
    scope
}

#[test]
fn test_step_count_termination() {
    let mut scope = scope();
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_decision(1);
    scope.stats_mut().record_decision(2);
    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_decision(3);
    assert_eq!(term.check(&scope), Some(TerminationReason::StepLimit));
}

#[test]
fn test_backtrack_count_termination() {
    let mut scope = scope();
    let term = BacktrackCountTermination::new(1);

    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_backtrack();
    assert_eq!(term.check(&scope), Some(TerminationReason::BacktrackLimit));
}

#[test]
fn test_time_termination() {
    let scope = scope();
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
    assert_eq!(
        TimeTermination::new(Duration::ZERO).check(&scope),
        Some(TerminationReason::TimeLimit)
    );
}

#[test]
fn test_external_termination() {
    let scope = scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(flag.clone());

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert_eq!(term.check(&scope), Some(TerminationReason::Cancelled));
}

#[test]
fn test_or_termination_reports_first_reason() {
    let mut scope = scope();
    scope.stats_mut().record_decision(1);
    scope.stats_mut().record_backtrack();

    let term = OrTermination((
        StepCountTermination::new(5),
        BacktrackCountTermination::new(1),
        StepCountTermination::new(1),
    ));
    assert_eq!(term.check(&scope), Some(TerminationReason::BacktrackLimit));

    let term = OrTermination((StepCountTermination::new(5), NoTermination));
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = scope();
    let none: Option<TimeTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(TimeTermination::new(Duration::ZERO)).is_terminated(&scope));
}

#[test]
fn test_from_config() {
    let mut scope = scope();
    assert!(!from_config(None).is_terminated(&scope));

    let config = TerminationConfig {
        step_count_limit: Some(2),
        ..TerminationConfig::default()
    };
    let term = from_config(Some(&config));
    assert!((term.0).0.is_none());
    assert!((term.0).2.is_none());

    scope.stats_mut().record_decision(1);
    assert!(!term.is_terminated(&scope));
    scope.stats_mut().record_decision(2);
    assert_eq!(term.check(&scope), Some(TerminationReason::StepLimit));
}

//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "full_assert"
        random_seed = 42

        [termination]
        seconds_spent_limit = 30
        backtrack_count_limit = 500

        [search]
        passenger_order = "fewest_candidates"
        value_order = "shuffled"

        [model]
        missing_category = "infeasible"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.random_seed, Some(42));
    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.backtrack_count_limit, Some(500));
    assert_eq!(config.search.passenger_order, PassengerOrder::FewestCandidates);
    assert_eq!(config.search.value_order, ValueOrder::Shuffled);
    assert_eq!(config.model.missing_category, MissingCategoryPolicy::Infeasible);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 7
        termination:
          millis_spent_limit: 250
        search:
          passenger_order: roster
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
}

#[test]
fn test_empty_document_is_default() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert!(config.termination.is_none());
    assert_eq!(config.search.passenger_order, PassengerOrder::Roster);
    assert_eq!(config.search.value_order, ValueOrder::Layout);
    assert_eq!(config.model.missing_category, MissingCategoryPolicy::Reject);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_shuffled_without_seed_is_rejected_when_reproducible() {
    let toml = r#"
        [search]
        value_order = "shuffled"
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let toml = r#"
        environment_mode = "non_reproducible"
        [search]
        value_order = "shuffled"
    "#;
    assert!(SolverConfig::from_toml_str(toml).is_ok());
}

#[test]
fn test_zero_step_limit_is_rejected() {
    let toml = r#"
        [termination]
        step_count_limit = 0
    "#;
    assert!(SolverConfig::from_toml_str(toml).is_err());
}

#[test]
fn test_oversized_time_limit() {
    let toml = r#"
        [termination]
        seconds_spent_limit = 18446744073709552
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let t = TerminationConfig {
        seconds_spent_limit: Some(u64::MAX),
        millis_spent_limit: Some(u64::MAX),
        ..TerminationConfig::default()
    };
    assert!(t.time_limit().unwrap() >= Duration::from_secs(u64::MAX));
    assert!(!t.is_unbounded());
}

#[test]
fn test_unknown_enum_value_is_a_parse_error() {
    let toml = r#"
        [search]
        passenger_order = "alphabetical"
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/seatforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_step_count_limit(10_000)
        .with_passenger_order(PassengerOrder::FewestCandidates)
        .with_value_order(ValueOrder::Shuffled)
        .with_missing_category(MissingCategoryPolicy::Infeasible)
        .with_environment_mode(EnvironmentMode::FullAssert);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    let termination = config.termination.as_ref().unwrap();
    assert_eq!(termination.step_count_limit, Some(10_000));
    assert!(!termination.is_unbounded());
    assert!(config.environment_mode.is_asserted());
    assert!(config.validate().is_ok());
}

#[test]
fn test_termination_unbounded() {
    assert!(TerminationConfig::default().is_unbounded());
    let t = TerminationConfig {
        seconds_spent_limit: Some(1),
        millis_spent_limit: Some(500),
        ..Default::default()
    };
    assert_eq!(t.time_limit(), Some(Duration::from_millis(1500)));
}

//! Configuration system for SeatForge.
//!
//! Load solver configuration from TOML or YAML to control search bounds,
//! search ordering and model policies without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatforge_config::{PassengerOrder, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [termination]
//!     seconds_spent_limit = 30
//!     step_count_limit = 100000
//!
//!     [search]
//!     passenger_order = "fewest_candidates"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.search.passenger_order, PassengerOrder::FewestCandidates);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("seatforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for shuffled value ordering.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration. No bound when absent.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Search ordering configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Model construction policies.
    #[serde(default)]
    pub model: ModelConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks combinations that parse but cannot be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.value_order == ValueOrder::Shuffled
            && self.random_seed.is_none()
            && self.environment_mode == EnvironmentMode::Reproducible
        {
            return Err(ConfigError::Invalid(
                "shuffled value order in reproducible mode requires random_seed".to_string(),
            ));
        }
        if let Some(t) = &self.termination {
            if t.step_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "step_count_limit must be positive".to_string(),
                ));
            }
            if t.total_millis().is_none() {
                return Err(ConfigError::Invalid(
                    "time limit does not fit in u64 milliseconds".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the decision (step) limit.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the passenger ordering.
    pub fn with_passenger_order(mut self, order: PassengerOrder) -> Self {
        self.search.passenger_order = order;
        self
    }

    /// Sets the seat ordering.
    pub fn with_value_order(mut self, order: ValueOrder) -> Self {
        self.search.value_order = order;
        self
    }

    /// Sets the missing seat category policy.
    pub fn with_missing_category(mut self, policy: MissingCategoryPolicy) -> Self {
        self.model.missing_category = policy;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Shuffled orderings may use an entropy-seeded RNG.
    NonReproducible,

    /// Deterministic behavior: identical input yields identical output.
    #[default]
    Reproducible,

    /// Reproducible, and every propagation fixpoint is re-checked.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if the mode enables expensive internal assertions.
    pub fn is_asserted(self) -> bool {
        self == EnvironmentMode::FullAssert
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving (added to the seconds limit).
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of decisions (tentative seatings).
    pub step_count_limit: Option<u64>,

    /// Maximum number of backtracks.
    pub backtrack_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Saturates at `Duration::MAX`; [`SolverConfig::validate`] rejects
    /// limits whose total does not fit in milliseconds.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        (!limit.is_zero()).then_some(limit)
    }

    /// Total time limit in milliseconds, or `None` if it overflows `u64`.
    fn total_millis(&self) -> Option<u64> {
        self.seconds_spent_limit
            .unwrap_or(0)
            .checked_mul(1000)?
            .checked_add(self.millis_spent_limit.unwrap_or(0))
    }

    /// Returns true if no bound is configured.
    pub fn is_unbounded(&self) -> bool {
        self.time_limit().is_none()
            && self.step_count_limit.is_none()
            && self.backtrack_count_limit.is_none()
    }
}

/// Search ordering configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Which unseated passenger to branch on next.
    #[serde(default)]
    pub passenger_order: PassengerOrder,

    /// In which order to try candidate seats.
    #[serde(default)]
    pub value_order: ValueOrder,
}

/// Passenger (variable) ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerOrder {
    /// Roster order.
    #[default]
    Roster,

    /// Passenger with the fewest remaining seats first, ties by roster order.
    FewestCandidates,
}

/// Seat (value) ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrder {
    /// Layout order.
    #[default]
    Layout,

    /// Layout order shuffled once per passenger with the configured seed.
    Shuffled,
}

/// Model construction policies.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelConfig {
    /// What to do when a passenger prefers a seat category the layout lacks.
    #[serde(default)]
    pub missing_category: MissingCategoryPolicy,
}

/// Handling of a preference whose seat subset is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCategoryPolicy {
    /// Fail model construction with a configuration error.
    #[default]
    Reject,

    /// Emit the empty exactly-one constraint; the search reports infeasible.
    Infeasible,
}

#[cfg(test)]
mod tests;

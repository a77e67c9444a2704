//! One-call entry points that hide model and solver wiring.

use std::io::ErrorKind;
use std::path::Path;

use seatforge_config::{ConfigError, SolverConfig};
use seatforge_core::{Passenger, Result, Seat};
use seatforge_solver::{SeatingSolver, SolveResult};
use tracing::warn;

const LOCAL_CONFIG: &str = "seatforge.toml";

/// Seats `roster` on `layout`.
///
/// Picks up `seatforge.toml` from the working directory when present. A
/// missing file means the default configuration; a file that fails to
/// parse or validate is logged and also falls back to the default.
pub fn solve_seating(layout: &[Seat], roster: &[Passenger]) -> Result<SolveResult> {
    solve_seating_with(local_config(LOCAL_CONFIG), layout, roster)
}

/// Seats `roster` on `layout` under an explicit configuration.
pub fn solve_seating_with(
    config: SolverConfig,
    layout: &[Seat],
    roster: &[Passenger],
) -> Result<SolveResult> {
    SeatingSolver::new(config).solve(layout, roster)
}

fn local_config(path: impl AsRef<Path>) -> SolverConfig {
    let path = path.as_ref();
    match SolverConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => SolverConfig::default(),
        Err(err) => {
            warn!(
                event = "config_ignored",
                path = %path.display(),
                error = %err,
            );
            SolverConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use seatforge_config::ValueOrder;

    use super::*;

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("seatforge-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_local_config_is_default() {
        let config = local_config("/nonexistent/seatforge.toml");
        assert!(config.termination.is_none());
    }

    #[test]
    fn test_valid_local_config_is_used() {
        let path = scratch_file(
            "valid.toml",
            "random_seed = 3\n[search]\nvalue_order = \"shuffled\"\n",
        );
        let config = local_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.random_seed, Some(3));
        assert_eq!(config.search.value_order, ValueOrder::Shuffled);
    }

    #[test]
    fn test_invalid_local_config_falls_back() {
        let path = scratch_file("invalid.toml", "[search]\nvalue_order = \"shuffled\"\n");
        let config = local_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.search.value_order, ValueOrder::Layout);
    }
}

//! Scenario files.
//!
//! A scenario file is TOML with an optional `name`, a `[[layout]]` table per
//! seat and a `[[passengers]]` table per passenger. Trait flags that are
//! not written default to false.
//!
//! ```toml
//! name = "Window seat"
//!
//! [[layout]]
//! id = "W"
//! x = 0
//! y = 0
//! position = "window"
//! orientation = "forward"
//!
//! [[passengers]]
//! id = 1
//! name = "Mia"
//! prefers_window = true
//! hates = [2]
//! ```

use std::path::Path;

use seatforge_core::{Passenger, Scenario, Seat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scenario file error
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

#[derive(Debug, Deserialize, Serialize)]
struct ScenarioFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    layout: Vec<Seat>,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

/// Loads a scenario file. Without a `name` key the file stem names it.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let mut scenario = from_toml_str(&contents)?;
    if scenario.name.is_empty() {
        if let Some(stem) = path.file_stem() {
            scenario.name = stem.to_string_lossy().into_owned();
        }
    }
    Ok(scenario)
}

/// Parses a scenario from TOML. A missing `name` parses as empty.
pub fn from_toml_str(s: &str) -> Result<Scenario, ScenarioError> {
    let file: ScenarioFile = toml::from_str(s)?;
    Ok(Scenario::new(
        file.name.unwrap_or_default(),
        file.layout,
        file.passengers,
    ))
}

/// Writes a scenario in the format [`from_toml_str`] reads.
pub fn to_toml_string(scenario: &Scenario) -> Result<String, ScenarioError> {
    let file = ScenarioFile {
        name: Some(scenario.name.clone()).filter(|n| !n.is_empty()),
        layout: scenario.layout.clone(),
        passengers: scenario.passengers.clone(),
    };
    Ok(toml::to_string(&file)?)
}

#[cfg(test)]
mod tests {
    use seatforge_core::{Orientation, PassengerId, Position};

    use super::*;

    const PAIR: &str = r#"
name = "Pair"

[[layout]]
id = "W"
x = 0
y = 0
position = "window"
orientation = "forward"

[[layout]]
id = "A"
x = 1
y = 0
position = "aisle"
orientation = "backward"

[[passengers]]
id = 1
name = "Mia"
prefers_window = true

[[passengers]]
id = 2
name = "Leo"
must_be_near = [1]
"#;

    #[test]
    fn test_parse() {
        let scenario = from_toml_str(PAIR).unwrap();
        assert_eq!(scenario.name, "Pair");
        assert_eq!(scenario.layout.len(), 2);
        assert_eq!(scenario.layout[1].position, Position::Aisle);
        assert_eq!(scenario.layout[1].orientation, Orientation::Backward);

        let mia = &scenario.passengers[0];
        assert!(mia.traits.prefers_window);
        assert!(!mia.traits.talkative);
        assert!(mia.hates.is_empty());
        assert_eq!(scenario.passengers[1].must_be_near, vec![PassengerId(1)]);
    }

    #[test]
    fn test_parsed_scenario_solves() {
        let scenario = from_toml_str(PAIR).unwrap();
        let result = crate::solve_seating_with(
            Default::default(),
            &scenario.layout,
            &scenario.passengers,
        )
        .unwrap();
        let plan = result.plan().unwrap();
        assert_eq!(plan.occupant_of("W"), Some(PassengerId(1)));
        assert_eq!(plan.occupant_of("A"), Some(PassengerId(2)));
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let scenario = from_toml_str("").unwrap();
        assert!(scenario.name.is_empty());
        assert!(scenario.layout.is_empty());
        assert!(scenario.passengers.is_empty());
    }

    #[test]
    fn test_bad_position_is_a_parse_error() {
        let err = from_toml_str(&PAIR.replace("\"aisle\"", "\"roof\"")).unwrap_err();
        assert!(matches!(err, ScenarioError::Toml(_)));
    }

    #[test]
    fn test_write_then_read_london() {
        let london = Scenario::london(2).unwrap();
        let text = to_toml_string(&london).unwrap();
        assert_eq!(from_toml_str(&text).unwrap(), london);
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenario("/nonexistent/pair.toml").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }
}

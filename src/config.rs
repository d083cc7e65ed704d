//! TOML-based charging plan configuration and the built-in standard plan.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::circuit::{Phase, Scenario};

/// Battery capacity of the standard plan (kWh).
const STANDARD_CAPACITY_KWH: f64 = 35.8;
/// Nominal phase-to-neutral supply voltage (V).
const SINGLE_PHASE_VOLTAGE_V: f64 = 230.0;
/// Nominal phase-to-phase supply voltage (V).
const THREE_PHASE_VOLTAGE_V: f64 = 400.0;
/// Charging currents evaluated per circuit (A).
const STANDARD_CURRENTS_A: [f64; 3] = [10.0, 16.0, 32.0];

/// Top-level charging plan parsed from TOML.
///
/// All fields have defaults matching the standard plan. Load from TOML
/// with [`PlanConfig::from_toml_file`] or use [`PlanConfig::standard`]
/// for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Battery parameters.
    pub battery: BatteryConfig,
    /// Ordered charging scenarios; the table prints one row per entry.
    pub scenarios: Vec<ScenarioEntry>,
}

/// Battery parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Usable energy capacity (kWh).
    pub capacity_kwh: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: STANDARD_CAPACITY_KWH,
        }
    }
}

/// One charging scenario as written in a plan file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioEntry {
    /// Charging current (A).
    pub current_a: f64,
    /// Supply voltage (V).
    pub voltage_v: f64,
    /// Circuit phase type: `"single"` or `"three"`.
    pub phase: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"scenarios[2].current_a"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl PlanConfig {
    /// Returns the standard plan: a 35.8 kWh battery charged at 10, 16 and
    /// 32 A, first on a 230 V single-phase circuit, then on a 400 V
    /// three-phase circuit.
    pub fn standard() -> Self {
        let mut scenarios = Vec::with_capacity(STANDARD_CURRENTS_A.len() * 2);
        for &current_a in &STANDARD_CURRENTS_A {
            scenarios.push(ScenarioEntry {
                current_a,
                voltage_v: SINGLE_PHASE_VOLTAGE_V,
                phase: "single".to_string(),
            });
        }
        for &current_a in &STANDARD_CURRENTS_A {
            scenarios.push(ScenarioEntry {
                current_a,
                voltage_v: THREE_PHASE_VOLTAGE_V,
                phase: "three".to_string(),
            });
        }
        Self {
            battery: BatteryConfig::default(),
            scenarios,
        }
    }

    /// Parses a plan from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "plan".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a plan from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the plan is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.battery.capacity_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if self.scenarios.is_empty() {
            errors.push(ConfigError {
                field: "scenarios".into(),
                message: "must contain at least one entry".into(),
            });
        }
        for (i, entry) in self.scenarios.iter().enumerate() {
            if entry.current_a <= 0.0 {
                errors.push(ConfigError {
                    field: format!("scenarios[{i}].current_a"),
                    message: "must be > 0".into(),
                });
            }
            if entry.voltage_v <= 0.0 {
                errors.push(ConfigError {
                    field: format!("scenarios[{i}].voltage_v"),
                    message: "must be > 0".into(),
                });
            }
            if entry.phase != "single" && entry.phase != "three" {
                errors.push(ConfigError {
                    field: format!("scenarios[{i}].phase"),
                    message: format!("must be \"single\" or \"three\", got \"{}\"", entry.phase),
                });
            }
        }

        errors
    }

    /// Converts the plan entries into domain scenarios, in plan order.
    ///
    /// Phase strings map as in [`PlanConfig::validate`]; any other value
    /// falls back to single-phase, so validate first.
    ///
    /// # Panics
    ///
    /// Panics if an entry carries a non-positive current or voltage.
    pub fn to_scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .map(|entry| {
                let phase = match entry.phase.as_str() {
                    "three" => Phase::Three,
                    _ => Phase::Single,
                };
                Scenario::new(entry.current_a, entry.voltage_v, phase)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_valid() {
        let plan = PlanConfig::standard();
        let errors = plan.validate();
        assert!(errors.is_empty(), "standard should be valid: {errors:?}");
    }

    #[test]
    fn standard_plan_layout() {
        let plan = PlanConfig::standard();
        assert_eq!(plan.battery.capacity_kwh, 35.8);
        assert_eq!(plan.scenarios.len(), 6);
        // Single-phase circuits come first, three-phase after.
        for entry in &plan.scenarios[..3] {
            assert_eq!(entry.voltage_v, 230.0);
            assert_eq!(entry.phase, "single");
        }
        for entry in &plan.scenarios[3..] {
            assert_eq!(entry.voltage_v, 400.0);
            assert_eq!(entry.phase, "three");
        }
        let currents: Vec<f64> = plan.scenarios.iter().map(|s| s.current_a).collect();
        assert_eq!(currents, vec![10.0, 16.0, 32.0, 10.0, 16.0, 32.0]);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[battery]
capacity_kwh = 52.0

[[scenarios]]
current_a = 16.0
voltage_v = 230.0
phase = "single"

[[scenarios]]
current_a = 16.0
voltage_v = 400.0
phase = "three"
"#;
        let plan = PlanConfig::from_toml_str(toml);
        assert!(plan.is_ok(), "valid TOML should parse: {:?}", plan.err());
        let plan = plan.ok();
        assert_eq!(plan.as_ref().map(|p| p.battery.capacity_kwh), Some(52.0));
        assert_eq!(plan.as_ref().map(|p| p.scenarios.len()), Some(2));
        assert_eq!(plan.as_ref().map(|p| &*p.scenarios[1].phase), Some("three"));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[battery]
capacity_kwh = 35.8
bogus_field = true
"#;
        let result = PlanConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn scenario_entry_requires_all_fields() {
        let toml = r#"
[[scenarios]]
current_a = 16.0
"#;
        let result = PlanConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[battery]
capacity_kwh = 20.0
"#;
        let plan = PlanConfig::from_toml_str(toml);
        assert!(plan.is_ok());
        let plan = plan.ok();
        // capacity overridden
        assert_eq!(plan.as_ref().map(|p| p.battery.capacity_kwh), Some(20.0));
        // scenarios kept standard
        assert_eq!(plan.as_ref().map(|p| p.scenarios.len()), Some(6));
    }

    #[test]
    fn validation_catches_zero_capacity() {
        let mut plan = PlanConfig::standard();
        plan.battery.capacity_kwh = 0.0;
        let errors = plan.validate();
        assert!(errors.iter().any(|e| e.field == "battery.capacity_kwh"));
    }

    #[test]
    fn validation_catches_empty_scenarios() {
        let mut plan = PlanConfig::standard();
        plan.scenarios.clear();
        let errors = plan.validate();
        assert!(errors.iter().any(|e| e.field == "scenarios"));
    }

    #[test]
    fn validation_catches_nonpositive_current() {
        let mut plan = PlanConfig::standard();
        plan.scenarios[2].current_a = -16.0;
        let errors = plan.validate();
        assert!(errors.iter().any(|e| e.field == "scenarios[2].current_a"));
    }

    #[test]
    fn validation_catches_zero_voltage() {
        let mut plan = PlanConfig::standard();
        plan.scenarios[4].voltage_v = 0.0;
        let errors = plan.validate();
        assert!(errors.iter().any(|e| e.field == "scenarios[4].voltage_v"));
    }

    #[test]
    fn validation_catches_bad_phase() {
        let mut plan = PlanConfig::standard();
        plan.scenarios[0].phase = "dual".to_string();
        let errors = plan.validate();
        assert!(errors.iter().any(|e| e.field == "scenarios[0].phase"));
        assert!(errors[0].message.contains("dual"));
    }

    #[test]
    fn error_display_carries_field_path() {
        let err = ConfigError {
            field: "battery.capacity_kwh".to_string(),
            message: "must be > 0".to_string(),
        };
        let text = format!("{err}");
        assert!(text.contains("battery.capacity_kwh"));
        assert!(text.contains("must be > 0"));
    }

    #[test]
    fn to_scenarios_maps_phase_strings() {
        let plan = PlanConfig::standard();
        let scenarios = plan.to_scenarios();
        assert_eq!(scenarios.len(), 6);
        assert_eq!(scenarios[0].phase, Phase::Single);
        assert_eq!(scenarios[5].phase, Phase::Three);
        assert_eq!(scenarios[5].current_a, 32.0);
        assert_eq!(scenarios[5].voltage_v, 400.0);
    }
}

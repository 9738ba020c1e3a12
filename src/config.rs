// src/config.rs
//
// Configuration is collected once at startup and handed to the controller as
// plain structs. Nothing downstream reads from stdin or the environment.

use crate::error::{ConfigError, SimulationError};
use crate::global_variables::{
    DEFAULT_ALL_RED_TIME, DEFAULT_DIRECTION_A, DEFAULT_DIRECTION_B, DEFAULT_MAX_GREEN,
    DEFAULT_MIN_GREEN, DEFAULT_YELLOW_TIME,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which direction receives green first in each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceOrder {
    /// Direction A is always served first.
    #[default]
    Strict,
    /// Direction A first on odd cycles, direction B first on even cycles.
    Alternating,
}

impl ServiceOrder {
    /// Returns true when direction A opens the given (1-based) cycle.
    pub fn a_first(self, cycle: u32) -> bool {
        match self {
            ServiceOrder::Strict => true,
            ServiceOrder::Alternating => cycle % 2 == 1,
        }
    }
}

/// Fixed timing parameters of the intersection controller, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub min_green: u32,
    pub max_green: u32,
    pub yellow_time: u32,
    pub all_red_time: u32,
    pub direction_a: String,
    pub direction_b: String,
    pub service_order: ServiceOrder,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_green: DEFAULT_MIN_GREEN,
            max_green: DEFAULT_MAX_GREEN,
            yellow_time: DEFAULT_YELLOW_TIME,
            all_red_time: DEFAULT_ALL_RED_TIME,
            direction_a: DEFAULT_DIRECTION_A.to_string(),
            direction_b: DEFAULT_DIRECTION_B.to_string(),
            service_order: ServiceOrder::Strict,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_green > self.max_green {
            return Err(ConfigError::GreenBoundsInverted {
                min_green: self.min_green,
                max_green: self.max_green,
            });
        }
        if self.direction_a.trim().is_empty() || self.direction_b.trim().is_empty() {
            return Err(ConfigError::EmptyDirectionName);
        }
        if self.direction_a == self.direction_b {
            return Err(ConfigError::DuplicateDirectionName(self.direction_a.clone()));
        }
        Ok(())
    }

    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let config: ControllerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Where each cycle's density pair comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityMode {
    Manual { a: u32, b: u32 },
    Random,
}

/// Whether holds block for real time or are only announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    RealTime,
    Instant,
}

/// Everything one simulation run needs.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub cycles: u32,
    pub density_mode: DensityMode,
    pub pacing: Pacing,
    pub transition_log: Option<PathBuf>,
    pub controller: ControllerConfig,
}

impl SimulationConfig {
    pub fn new(cycles: u32, density_mode: DensityMode, pacing: Pacing) -> Self {
        Self {
            cycles,
            density_mode,
            pacing,
            transition_log: None,
            controller: ControllerConfig::default(),
        }
    }

    pub fn with_controller(mut self, controller: ControllerConfig) -> Self {
        self.controller = controller;
        self
    }

    pub fn with_transition_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.transition_log = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = ControllerConfig::default();
        assert_eq!(config.min_green, 5);
        assert_eq!(config.max_green, 40);
        assert_eq!(config.yellow_time, 3);
        assert_eq!(config.all_red_time, 1);
        assert_eq!(config.service_order, ServiceOrder::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_green_bounds() {
        let config = ControllerConfig {
            min_green: 30,
            max_green: 10,
            ..ControllerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GreenBoundsInverted {
                min_green: 30,
                max_green: 10
            })
        );
    }

    #[test]
    fn rejects_blank_and_duplicate_names() {
        let blank = ControllerConfig {
            direction_b: "  ".to_string(),
            ..ControllerConfig::default()
        };
        assert_eq!(blank.validate(), Err(ConfigError::EmptyDirectionName));

        let duplicate = ControllerConfig {
            direction_b: DEFAULT_DIRECTION_A.to_string(),
            ..ControllerConfig::default()
        };
        assert!(matches!(
            duplicate.validate(),
            Err(ConfigError::DuplicateDirectionName(_))
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "max_green": 60, "service_order": "alternating" }"#;
        let config = ControllerConfig::from_json_str(json).expect("valid config");
        assert_eq!(config.max_green, 60);
        assert_eq!(config.min_green, DEFAULT_MIN_GREEN);
        assert_eq!(config.service_order, ServiceOrder::Alternating);
    }

    #[test]
    fn json_with_inverted_bounds_is_rejected() {
        let result = ControllerConfig::from_json_str(r#"{ "min_green": 50 }"#);
        assert!(matches!(result, Err(SimulationError::Config(_))));
    }

    #[test]
    fn alternating_order_flips_on_even_cycles() {
        assert!(ServiceOrder::Alternating.a_first(1));
        assert!(!ServiceOrder::Alternating.a_first(2));
        assert!(ServiceOrder::Strict.a_first(2));
    }
}

//! Tunables for the tree simulation

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("{field} must be a probability in [0, 1], got {value}")]
    Probability { field: &'static str, value: f64 },
}

fn default_max_passable_growth_stage() -> u8 {
    0
}

fn default_max_shaded_growth_stage() -> u8 {
    4
}

fn default_daily_growth_chance() -> f64 {
    0.2
}

fn default_daily_spread_chance() -> f64 {
    0.15
}

fn default_daily_seed_chance() -> f64 {
    0.05
}

fn enabled() -> bool {
    true
}

/// Read-only for the duration of a simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_max_passable_growth_stage")]
    pub max_passable_growth_stage: u8,
    #[serde(default = "default_max_shaded_growth_stage")]
    pub max_shaded_growth_stage: u8,
    #[serde(default)]
    pub do_grow_in_winter: bool,
    #[serde(default)]
    pub do_grow_instantly: bool,
    #[serde(default = "default_daily_growth_chance")]
    pub daily_growth_chance: f64,
    #[serde(default = "enabled")]
    pub do_mushroom_trees_hibernate: bool,
    #[serde(default)]
    pub do_mushroom_trees_regrow: bool,
    #[serde(default = "enabled")]
    pub do_spread_in_winter: bool,
    #[serde(default = "enabled")]
    pub do_tapped_spread: bool,
    #[serde(default)]
    pub seeds_replace_grass: bool,
    #[serde(default = "default_daily_spread_chance")]
    pub daily_spread_chance: f64,
    #[serde(default = "default_daily_seed_chance")]
    pub daily_seed_chance: f64,
    #[serde(default)]
    pub do_seeds_persist: bool,
    #[serde(default)]
    pub prevent_scythe: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_passable_growth_stage: default_max_passable_growth_stage(),
            max_shaded_growth_stage: default_max_shaded_growth_stage(),
            do_grow_in_winter: false,
            do_grow_instantly: false,
            daily_growth_chance: default_daily_growth_chance(),
            do_mushroom_trees_hibernate: true,
            do_mushroom_trees_regrow: false,
            do_spread_in_winter: true,
            do_tapped_spread: true,
            seeds_replace_grass: false,
            daily_spread_chance: default_daily_spread_chance(),
            daily_seed_chance: default_daily_seed_chance(),
            do_seeds_persist: false,
            prevent_scythe: false,
        }
    }
}

impl TreeConfig {
    /// Load and validate a config from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: TreeConfig = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("daily_growth_chance", self.daily_growth_chance),
            ("daily_spread_chance", self.daily_spread_chance),
            ("daily_seed_chance", self.daily_seed_chance),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

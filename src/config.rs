//! Simulation tuning
//!
//! Stored as JSON next to the binary or supplied by a frontend. Every field
//! has a default, so partial files only override what they mention.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Failure to load a tuning file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Level-dependent tuning for the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Lives at the start of a session
    pub initial_lives: u8,

    // === Speeds (units per tick) ===
    pub agent_speed: f32,
    /// Ghost speed on level 1
    pub ghost_base_speed: f32,
    /// Added per level after the first
    pub ghost_speed_step: f32,
    /// Ghosts never get faster than this
    pub ghost_speed_cap: f32,
    /// Per-tick chance a ghost on a clear heading picks a new one anyway
    pub ghost_redirect_chance: f64,

    // === Power pellets (ticks) ===
    /// Frightened duration on level 1
    pub power_duration_base: u32,
    /// Removed per level after the first
    pub power_duration_step: u32,
    /// Frightened mode never gets shorter than this
    pub power_duration_min: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_lives: 3,

            agent_speed: 2.0,
            ghost_base_speed: 1.5,
            ghost_speed_step: 0.1,
            ghost_speed_cap: 1.9,
            ghost_redirect_chance: 0.05,

            // 10 seconds, one less per level, never under 3
            power_duration_base: 10 * TICKS_PER_SECOND,
            power_duration_step: TICKS_PER_SECOND,
            power_duration_min: 3 * TICKS_PER_SECOND,
        }
    }
}

impl SimConfig {
    /// Ghost speed on `level`; grows linearly and stops at the cap
    pub fn ghost_speed(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        (self.ghost_base_speed + steps * self.ghost_speed_step).min(self.ghost_speed_cap)
    }

    /// Frightened duration on `level`; shrinks linearly down to the floor
    pub fn power_duration(&self, level: u32) -> u32 {
        let cut = level
            .saturating_sub(1)
            .saturating_mul(self.power_duration_step);
        self.power_duration_base
            .saturating_sub(cut)
            .max(self.power_duration_min)
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_lives == 0 {
            return Err(ConfigError::Invalid("initial_lives must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.ghost_redirect_chance) {
            return Err(ConfigError::Invalid(
                "ghost_redirect_chance must be within 0.0..=1.0",
            ));
        }
        let tile = crate::consts::TILE_SIZE;
        for speed in [self.agent_speed, self.ghost_base_speed, self.ghost_speed_cap] {
            if !(speed > 0.0 && speed < tile) {
                return Err(ConfigError::Invalid("speeds must be positive and below one tile"));
            }
        }
        if self.power_duration_min == 0 {
            return Err(ConfigError::Invalid("power_duration_min must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON tuning
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded tuning from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}

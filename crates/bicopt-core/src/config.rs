//! Round configuration.
//!
//! `RoundConfig::default()` is the reference round. Hosts may override any
//! subset of fields from JSON; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::HostileKind;
use crate::error::ConfigError;

/// Per-kind spawner tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnProfile {
    pub kind: HostileKind,
    /// Seconds between spawns.
    pub cadence_secs: f64,
    /// Inclusive x bounds of the spawn point.
    pub x_range: (f32, f32),
    /// Inclusive y bounds of the spawn point.
    pub y_range: (f32, f32),
    /// Fixed spawn depth.
    pub z: f32,
    /// Inclusive bounds of the forward impulse magnitude.
    pub impulse_range: (f32, f32),
    /// Seconds before the target fades out on its own.
    pub lifespan_secs: f64,
}

/// Projectile launcher tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileProfile {
    pub impulse_scale: f32,
    pub lifespan_secs: f64,
}

/// Complete configuration for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: u32,
    pub placement_window: usize,
    pub minor: SpawnProfile,
    pub major: SpawnProfile,
    pub projectile: ProjectileProfile,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SpawnProfile {
    /// Reference tuning for the given kind.
    pub fn reference(kind: HostileKind) -> Self {
        let (cadence_secs, impulse_range, lifespan_secs) = match kind {
            HostileKind::Minor => (MINOR_CADENCE_SECS, MINOR_IMPULSE_RANGE, MINOR_LIFESPAN_SECS),
            HostileKind::Major => (MAJOR_CADENCE_SECS, MAJOR_IMPULSE_RANGE, MAJOR_LIFESPAN_SECS),
        };
        Self {
            kind,
            cadence_secs,
            x_range: SPAWN_X_RANGE,
            y_range: SPAWN_Y_RANGE,
            z: SPAWN_Z,
            impulse_range,
            lifespan_secs,
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if !(self.cadence_secs > 0.0) {
            return Err(invalid(field, format!("cadence must be positive, got {}", self.cadence_secs)));
        }
        if !(self.lifespan_secs > 0.0) {
            return Err(invalid(field, format!("lifespan must be positive, got {}", self.lifespan_secs)));
        }
        for (name, (lo, hi)) in [
            ("x_range", self.x_range),
            ("y_range", self.y_range),
            ("impulse_range", self.impulse_range),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(invalid(field, format!("{name} must be an ordered finite range, got ({lo}, {hi})")));
            }
        }
        Ok(())
    }
}

impl Default for ProjectileProfile {
    fn default() -> Self {
        Self {
            impulse_scale: PROJECTILE_IMPULSE_SCALE,
            lifespan_secs: PROJECTILE_LIFESPAN_SECS,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_secs: ROUND_DURATION_SECS,
            placement_window: PLACEMENT_WINDOW,
            minor: SpawnProfile::reference(HostileKind::Minor),
            major: SpawnProfile::reference(HostileKind::Major),
            projectile: ProjectileProfile::default(),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RoundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_secs == 0 {
            return Err(invalid("duration_secs", "must be at least 1".into()));
        }
        if self.placement_window == 0 {
            return Err(invalid("placement_window", "must be at least 1".into()));
        }
        if self.minor.kind != HostileKind::Minor {
            return Err(invalid("minor", "kind must be Minor".into()));
        }
        if self.major.kind != HostileKind::Major {
            return Err(invalid("major", "kind must be Major".into()));
        }
        self.minor.validate("minor")?;
        self.major.validate("major")?;
        if !(self.projectile.impulse_scale.is_finite()) {
            return Err(invalid("projectile", "impulse_scale must be finite".into()));
        }
        if !(self.projectile.lifespan_secs > 0.0) {
            return Err(invalid("projectile", "lifespan must be positive".into()));
        }
        Ok(())
    }

    /// Reference round with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

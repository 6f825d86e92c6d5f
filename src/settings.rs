//! Game settings and preferences
//!
//! Persisted as JSON next to the binary. Missing or broken files fall back
//! to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Physics, SessionConfig};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Velocity gained per tick at full tilt
    pub gravity: f32,
    /// Velocity multiplier per tick
    pub friction: f32,
    /// Freeze after scoring (seconds)
    pub score_cooldown_secs: f64,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub mover_width: f32,
    pub mover_height: f32,
    /// Round length in seconds; absent for endless play
    pub time_limit_secs: Option<f64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Debug ===
    /// Log per-tick mover state at trace level
    pub trace_ticks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            score_cooldown_secs: SCORE_COOLDOWN_SECS,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            spawn_x: SPAWN.x,
            spawn_y: SPAWN.y,
            mover_width: MOVER_WIDTH,
            mover_height: MOVER_HEIGHT,
            time_limit_secs: Some(60.0),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            trace_ticks: false,
        }
    }
}

impl Settings {
    pub fn spawn(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.spawn_y)
    }

    pub fn field(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Session parameters derived from these settings
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            physics: Physics {
                gravity: self.gravity,
                friction: self.friction,
                cooldown_secs: self.score_cooldown_secs,
            },
            field: self.field(),
            mover_size: Vec2::new(self.mover_width, self.mover_height),
            time_limit: self.time_limit_secs,
            trace_ticks: self.trace_ticks,
        }
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid settings in {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

//! Tilt Maze - a tilt-the-table maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `settings`: Data-driven tuning and preferences
//! - `audio`: Sound collaborator fed by simulation events

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect, SoundSink};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// One simulation step per rendered frame (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Mover spawn point (field center)
    pub const SPAWN: Vec2 = Vec2::new(400.0, 300.0);
    /// Declared mover size used for every rectangle test
    pub const MOVER_WIDTH: f32 = 10.0;
    pub const MOVER_HEIGHT: f32 = 10.0;

    /// Acceleration per tick at full tilt
    pub const GRAVITY: f32 = 0.5;
    /// Multiplicative velocity damping per tick
    pub const FRICTION: f32 = 0.95;
    /// Frozen interval after a score (seconds)
    pub const SCORE_COOLDOWN_SECS: f64 = 3.0;
    /// Slack for clock comparisons; summing `SIM_DT` drifts below exact multiples
    pub const CLOCK_EPSILON: f64 = 1e-6;
}

/// True once at least `span` seconds separate `since` and `now`
///
/// Tolerates accumulated rounding in the clock, so a span of 3.0 elapses on
/// the 180th tick of `SIM_DT`, not the 181st.
#[inline]
pub fn elapsed_at_least(now: f64, since: f64, span: f64) -> bool {
    now - since >= span - consts::CLOCK_EPSILON
}

/// Play field size as a vector
#[inline]
pub fn field_size() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH, consts::FIELD_HEIGHT)
}

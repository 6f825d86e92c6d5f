//! The player-controlled mover and its physics step

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::tilt::Tilt;
use crate::consts::*;
use crate::elapsed_at_least;

/// Physics tuning for the integration step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Velocity gained per tick at full tilt
    pub gravity: f32,
    /// Velocity multiplier applied once per tick
    pub friction: f32,
    /// Frozen interval after a score (seconds)
    pub cooldown_secs: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            cooldown_secs: SCORE_COOLDOWN_SECS,
        }
    }
}

/// The mover entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    /// Top-left of the mover's body; also the anchor tested against holes
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub score: u32,
    /// Clock reading of the last score, `None` before the first one
    pub last_score_time: Option<f64>,
}

impl Mover {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            score: 0,
            last_score_time: None,
        }
    }

    /// Declared-size bounding box
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// True while inside the post-score freeze window
    pub fn is_cooling_down(&self, now: f64, cooldown_secs: f64) -> bool {
        self.last_score_time
            .is_some_and(|t| !elapsed_at_least(now, t, cooldown_secs))
    }

    /// Advance one tick under tilt-driven gravity
    ///
    /// Does nothing while cooling down. Otherwise accelerates, moves, damps
    /// and bounces off the field edges, in that order.
    pub fn integrate(&mut self, tilt: Tilt, now: f64, physics: &Physics, field: Vec2) {
        if self.is_cooling_down(now, physics.cooldown_secs) {
            return;
        }

        self.vel += tilt.vec() * physics.gravity;
        self.pos += self.vel;
        self.vel *= physics.friction;

        self.bounce_off_edges(field);
    }

    /// Clamp to the field and reflect the offending velocity component
    fn bounce_off_edges(&mut self, field: Vec2) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x + self.size.x > field.x {
            self.pos.x = field.x - self.size.x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        } else if self.pos.y + self.size.y > field.y {
            self.pos.y = field.y - self.size.y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Move back to spawn at rest; score is untouched
    pub fn reset_to(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }

    /// Record a score at `now` and respawn
    pub fn score_at(&mut self, now: f64, spawn: Vec2) {
        self.score += 1;
        self.last_score_time = Some(now);
        self.reset_to(spawn);
    }

    /// Wall penalty, floored at zero
    pub fn penalize(&mut self) {
        self.score = self.score.saturating_sub(1);
    }
}

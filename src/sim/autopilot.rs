//! Idle/demo mode - a seeded controller that plays the game
//!
//! Steers toward the nearest hole, leading by the mover's velocity so it
//! brakes on approach, with a little seeded jitter for variety.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Session;
use super::tilt::Tilt;

/// Frames of velocity to lead the target by
const LEAD_FRAMES: f32 = 12.0;
/// Distance at which the controller stops pushing at full tilt
const FULL_TILT_DISTANCE: f32 = 60.0;

/// Demo controller
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    jitter: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter: 0.15,
        }
    }

    /// Override the per-axis jitter amplitude (0 disables it)
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.abs();
        self
    }

    /// Pick this frame's tilt for `session`
    pub fn next_tilt(&mut self, session: &Session) -> Tilt {
        let mover = session.mover();
        let predicted = mover.pos + mover.vel * LEAD_FRAMES;

        let steer = session
            .maze()
            .holes
            .iter()
            .map(|h| h.center())
            .min_by(|a, b| {
                a.distance_squared(mover.pos)
                    .partial_cmp(&b.distance_squared(mover.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|target| {
                let to_target = target - predicted;
                let strength = (to_target.length() / FULL_TILT_DISTANCE).min(1.0);
                to_target.normalize_or_zero() * strength
            })
            .unwrap_or(Vec2::ZERO);

        let noise = if self.jitter > 0.0 {
            Vec2::new(
                self.rng.random_range(-self.jitter..=self.jitter),
                self.rng.random_range(-self.jitter..=self.jitter),
            )
        } else {
            Vec2::ZERO
        };

        let tilt = steer + noise;
        Tilt::new(tilt.x, tilt.y)
    }
}

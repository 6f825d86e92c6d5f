//! Tilt input mapping
//!
//! The pointer's offset from screen center, normalized by half the screen
//! size and clamped per axis. Every adapter must go through `from_pointer`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Normalized table tilt, each component in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tilt(Vec2);

impl Tilt {
    pub const ZERO: Self = Self(Vec2::ZERO);

    /// Build a tilt, clamping each component to [-1, 1]
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(clamp_axis(x), clamp_axis(y)))
    }

    /// Map a pointer position on a `screen`-sized surface to a tilt
    pub fn from_pointer(pointer: Vec2, screen: Vec2) -> Self {
        let half = screen / 2.0;
        Self::new(axis(pointer.x, half.x), axis(pointer.y, half.y))
    }

    #[inline]
    pub fn vec(self) -> Vec2 {
        self.0
    }
}

fn axis(p: f32, half: f32) -> f32 {
    if half <= 0.0 {
        return 0.0;
    }
    (p - half) / half
}

/// NaN reads as level
fn clamp_axis(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

impl From<Tilt> for Vec2 {
    fn from(tilt: Tilt) -> Self {
        tilt.0
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` handed to `tick`
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (maze insertion order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod maze;
pub mod mover;
pub mod state;
pub mod tick;
pub mod tilt;

pub use autopilot::Autopilot;
pub use collision::{CollisionOutcome, evaluate};
pub use geometry::{Circle, Rect, circle_contains, rect_overlap};
pub use maze::{Hole, Maze, MazeError, Wall};
pub use mover::{Mover, Physics};
pub use state::{GameEvent, GamePhase, Session, SessionConfig, TickResult};
pub use tick::{TickInput, tick};
pub use tilt::Tilt;

//! Session state and per-tick output types
//!
//! A session owns the maze and the mover for its whole lifetime. Adapters
//! only ever see the `TickResult` snapshot and the read-only maze.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::maze::Maze;
use super::mover::{Mover, Physics};
use super::tick::{TickInput, tick};
use super::tilt::Tilt;
use crate::consts::*;
use crate::field_size;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mover responds to tilt
    Active,
    /// Frozen after a score until the cooldown elapses
    Cooldown,
    /// Time limit reached; ticks are ignored until a new game
    GameOver,
}

/// Notifications for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Mover overlapped a wall
    Collision,
    /// Mover fell into a hole
    Score,
    /// Round ended
    GameOver,
}

/// Construction-time session parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub physics: Physics,
    /// Play field size; the mover bounces off its edges
    pub field: Vec2,
    pub mover_size: Vec2,
    /// Round length in seconds, `None` for endless play
    pub time_limit: Option<f64>,
    /// Emit a trace line per tick with the mover's state
    pub trace_ticks: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            field: field_size(),
            mover_size: Vec2::new(MOVER_WIDTH, MOVER_HEIGHT),
            time_limit: None,
            trace_ticks: false,
        }
    }
}

/// Snapshot produced at the end of every tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickResult {
    pub mover_position: Vec2,
    pub mover_size: Vec2,
    pub score: u32,
    pub phase: GamePhase,
    pub events: Vec<GameEvent>,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) maze: Maze,
    pub(super) mover: Mover,
    pub(super) spawn: Vec2,
    pub(super) config: SessionConfig,
    /// Simulation clock (seconds)
    pub(super) now: f64,
    /// Clock reading when the current game started
    pub(super) started_at: f64,
    pub(super) game_over: bool,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
}

impl Session {
    pub fn new(maze: Maze, spawn: Vec2) -> Self {
        Self::with_config(maze, spawn, SessionConfig::default())
    }

    pub fn with_config(maze: Maze, spawn: Vec2, config: SessionConfig) -> Self {
        let outside = maze.out_of_bounds(config.field);
        if outside > 0 {
            log::warn!("{} maze shapes lie outside the play field", outside);
        }

        Self {
            mover: Mover::new(spawn, config.mover_size),
            maze,
            spawn,
            config,
            now: 0.0,
            started_at: 0.0,
            game_over: false,
            time_ticks: 0,
        }
    }

    /// Advance one frame with the given tilt
    pub fn tick(&mut self, tilt: Tilt, dt: f64) -> TickResult {
        tick(self, &TickInput { tilt, ..Default::default() }, dt)
    }

    /// Derived from the clock and the mover's last score time
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self
            .mover
            .is_cooling_down(self.now, self.config.physics.cooldown_secs)
        {
            GamePhase::Cooldown
        } else {
            GamePhase::Active
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn score(&self) -> u32 {
        self.mover.score
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current clock reading (seconds)
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Seconds left in the round, if it is timed
    pub fn time_remaining(&self) -> Option<f64> {
        self.config
            .time_limit
            .map(|limit| (limit - (self.now - self.started_at)).max(0.0))
    }

    /// Put the mover back on the spawn point; score is kept
    pub fn reset_mover(&mut self) {
        self.mover.reset_to(self.spawn);
    }

    /// Start over: respawn, zero score, clear cooldown and the round timer
    pub fn new_game(&mut self) {
        self.mover = Mover::new(self.spawn, self.config.mover_size);
        self.started_at = self.now;
        self.game_over = false;
    }

    /// Snapshot for the render/audio adapters
    pub fn snapshot(&self, events: Vec<GameEvent>) -> TickResult {
        TickResult {
            mover_position: self.mover.pos,
            mover_size: self.mover.size,
            score: self.mover.score,
            phase: self.phase(),
            events,
        }
    }
}

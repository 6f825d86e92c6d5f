//! Static maze layout
//!
//! Walls and holes are authored once and never mutated while a session runs.
//! A plain JSON form is accepted for custom layouts.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::{Circle, Rect};

/// An axis-aligned wall, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A scoring hole, `(x, y)` is the center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Hole {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.radius)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Errors raised while loading a maze layout
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse maze layout: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("wall {index} has non-positive or non-finite geometry")]
    InvalidWall { index: usize },
    #[error("hole {index} has non-positive or non-finite geometry")]
    InvalidHole { index: usize },
}

/// Maze layout: walls and holes in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl Maze {
    pub fn new(walls: Vec<Wall>, holes: Vec<Hole>) -> Self {
        Self { walls, holes }
    }

    /// The hand-authored layout the game ships with
    pub fn classic() -> Self {
        Self {
            walls: vec![
                Wall::new(50.0, 50.0, 100.0, 20.0),
                Wall::new(200.0, 150.0, 20.0, 100.0),
            ],
            holes: vec![Hole::new(150.0, 200.0, 15.0), Hole::new(300.0, 100.0, 10.0)],
        }
    }

    /// Parse and validate a JSON layout
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let maze: Maze = serde_json::from_str(json)?;
        maze.validate()?;
        Ok(maze)
    }

    /// Load a JSON layout from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let maze = Self::from_json(&json)?;
        log::info!(
            "Loaded maze from {} ({} walls, {} holes)",
            path.display(),
            maze.walls.len(),
            maze.holes.len()
        );
        Ok(maze)
    }

    /// Reject degenerate shapes; an empty maze is fine
    pub fn validate(&self) -> Result<(), MazeError> {
        for (index, wall) in self.walls.iter().enumerate() {
            let finite = [wall.x, wall.y, wall.width, wall.height]
                .iter()
                .all(|v| v.is_finite());
            if !finite || wall.width <= 0.0 || wall.height <= 0.0 {
                return Err(MazeError::InvalidWall { index });
            }
        }
        for (index, hole) in self.holes.iter().enumerate() {
            let finite = [hole.x, hole.y, hole.radius].iter().all(|v| v.is_finite());
            if !finite || hole.radius <= 0.0 {
                return Err(MazeError::InvalidHole { index });
            }
        }
        Ok(())
    }

    /// Count shapes that stick out of a `field`-sized play area
    ///
    /// Out-of-field geometry is legal but unreachable, so callers only warn.
    pub fn out_of_bounds(&self, field: Vec2) -> usize {
        let walls = self
            .walls
            .iter()
            .filter(|w| {
                w.x < 0.0 || w.y < 0.0 || w.x + w.width > field.x || w.y + w.height > field.y
            })
            .count();
        let holes = self
            .holes
            .iter()
            .filter(|h| h.x < 0.0 || h.y < 0.0 || h.x > field.x || h.y > field.y)
            .count();
        walls + holes
    }
}

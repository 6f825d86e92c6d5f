//! Collision detection between the mover and the maze
//!
//! First match wins: walls are scanned before holes, each in maze order.
//! The mover is a declared-size rectangle against walls and a single anchor
//! point against holes.

use serde::{Deserialize, Serialize};

use super::geometry::{circle_contains, rect_overlap};
use super::maze::Maze;
use super::mover::Mover;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    None,
    /// Index of the first overlapping wall
    WallHit(usize),
    /// Index of the first hole containing the mover's anchor
    HoleHit(usize),
}

/// Classify the mover's current position against the maze
pub fn evaluate(mover: &Mover, maze: &Maze) -> CollisionOutcome {
    let body = mover.bounds();
    if let Some(i) = maze.walls.iter().position(|w| rect_overlap(&body, &w.rect())) {
        return CollisionOutcome::WallHit(i);
    }

    if let Some(i) = maze
        .holes
        .iter()
        .position(|h| circle_contains(&h.circle(), mover.pos))
    {
        return CollisionOutcome::HoleHit(i);
    }

    CollisionOutcome::None
}

//! Collision detection between the actor, the playfield bounds and obstacles
//!
//! Everything here is a pure function of its inputs so the same actor and
//! obstacle list always give the same answer.

use serde::{Deserialize, Serialize};

use super::state::{Actor, Obstacle};
use crate::tuning::Tuning;

/// What the actor ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Touched the top of the playfield
    Ceiling,
    /// Reached the bottom of the playfield
    Floor,
    /// Hit an obstacle segment (index into the obstacle queue)
    Obstacle { index: usize },
}

/// Half-open interval overlap: `[a0, a1)` against `[b0, b1)`
#[inline]
pub fn spans_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    a0 < b1 && a1 > b0
}

/// Check the actor against the playfield bounds
pub fn boundary_collision(actor: &Actor, tuning: &Tuning) -> Option<Collision> {
    if actor.pos.y <= 0.0 {
        Some(Collision::Ceiling)
    } else if actor.pos.y >= tuning.viewport_height - tuning.actor_height {
        Some(Collision::Floor)
    } else {
        None
    }
}

/// Whether the actor overlaps a solid part of one obstacle
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let x = actor.pos.x;
    let y = actor.pos.y;

    spans_overlap(x, x + tuning.actor_width, obstacle.x, obstacle.right_edge(tuning))
        && (y < obstacle.gap_top || y + tuning.actor_height > obstacle.gap_bottom)
}

/// Full collision check: bounds first, then the first overlapping obstacle
pub fn check_collision<'a, I>(actor: &Actor, obstacles: I, tuning: &Tuning) -> Option<Collision>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    if let Some(hit) = boundary_collision(actor, tuning) {
        return Some(hit);
    }

    obstacles
        .into_iter()
        .position(|o| hits_obstacle(actor, o, tuning))
        .map(|index| Collision::Obstacle { index })
}

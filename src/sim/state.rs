//! Game state and core simulation types
//!
//! Everything a frame needs to be rendered lives here. Commands on
//! [`GameState`] are total: calling one in the wrong phase does nothing.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collision;
use super::spawn::{GapSource, generate_obstacle};
use crate::tuning::Tuning;

/// Lifecycle of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first primary action
    #[default]
    NotStarted,
    /// Ticking; obstacles scroll and gravity applies
    Running,
    /// Actor collided; waits for an explicit reset
    Over,
}

/// The player-controlled bird
///
/// Only a position is stored. Flaps edit `pos.y` directly; there is no velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner; `x` never changes during a run
    pub pos: Vec2,
}

impl Actor {
    pub fn at_home(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.actor_home(),
        }
    }
}

/// A pipe pair with an opening between `gap_top` and `gap_bottom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    /// Set once the obstacle has scored
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.obstacle_width
    }
}

/// Things that happened during a command or tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped { y: f32 },
    Scored { score: u32 },
    Crashed { cause: Collision, score: u32 },
    Reset,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub actor: Actor,
    /// Left to right, which is also spawn order
    pub obstacles: VecDeque<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks simulated since the last start
    pub time_ticks: u64,
    /// Pending events (not part of the simulation)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state waiting for `start`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            actor: Actor::at_home(tuning),
            obstacles: VecDeque::new(),
            score: 0,
            phase: GamePhase::NotStarted,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Begin a run: actor home, score cleared, one obstacle at the right edge
    ///
    /// Only acts in `NotStarted`; a finished run must be reset first.
    pub fn start<S: GapSource + ?Sized>(&mut self, tuning: &Tuning, source: &mut S) {
        if self.phase != GamePhase::NotStarted {
            return;
        }

        self.actor = Actor::at_home(tuning);
        self.score = 0;
        self.time_ticks = 0;
        self.obstacles.clear();
        self.obstacles
            .push_back(generate_obstacle(tuning.viewport_width, tuning, source));
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::debug!("run started");
    }

    /// Flap: move the actor up by the flap displacement, never above the top
    ///
    /// The floor is not clamped here; only gravity can end the run on it.
    pub fn activate(&mut self, tuning: &Tuning) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.actor.pos.y = (self.actor.pos.y + tuning.flap_displacement).max(0.0);
        self.events.push(GameEvent::Flapped {
            y: self.actor.pos.y,
        });
    }

    /// Return to the just-constructed state
    ///
    /// Ignored while `Running`; a live run only ends by colliding.
    pub fn reset(&mut self, tuning: &Tuning) {
        if self.phase == GamePhase::Running {
            return;
        }

        let mut events = std::mem::take(&mut self.events);
        *self = Self::new(tuning);
        events.push(GameEvent::Reset);
        self.events = events;
        log::debug!("state reset");
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor_position: self.actor.pos,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_top: o.gap_top,
                    gap_bottom: o.gap_bottom,
                })
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}

/// Obstacle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Read-only copy of what a frame should show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub actor_position: Vec2,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub phase: GamePhase,
}

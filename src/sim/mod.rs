//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame, no timers
//! - Injected gap source only
//! - Stable obstacle order (left to right == spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::should_flap;
pub use collision::{Collision, boundary_collision, check_collision, hits_obstacle};
pub use engine::{Command, Engine};
pub use spawn::{GapSource, generate_obstacle};
pub use state::{Actor, GameEvent, GamePhase, GameState, Obstacle, ObstacleView, Snapshot};
pub use tick::tick;

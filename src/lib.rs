//! Nightflap - a Flappy Bird clone under a starry sky
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor, obstacles, collisions, phases)
//! - `tuning`: Data-driven game constants
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Input mapping and viewport sizing for the host page

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{Engine, GamePhase, GameState, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Host tick cadence (one simulation step per 60 Hz frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const VIEWPORT_WIDTH: f32 = 400.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Downward displacement applied every tick
    pub const GRAVITY_STEP: f32 = 2.0;
    /// Instant vertical displacement of a flap (negative is up)
    pub const FLAP_DISPLACEMENT: f32 = -100.0;

    /// Actor (bird) defaults
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 30.0;
    pub const ACTOR_START_X: f32 = 100.0;

    /// Obstacle (pipe pair) defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const GAP_HEIGHT: f32 = 200.0;
    /// Smallest top/bottom segment a generated gap leaves
    pub const MIN_SEGMENT: f32 = 50.0;
    /// Leftward scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Horizontal distance the newest obstacle travels before the next spawns
    pub const SPAWN_PITCH: f32 = 300.0;
}

//! Procedural starfield behind the playfield

use glam::Vec2;
use rand::Rng;

use crate::tuning::Tuning;

/// Number of stars in the default sky
pub const STAR_COUNT: usize = 50;

/// A single background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Base opacity (0.2 - 1.0)
    pub opacity: f32,
    /// Diameter in game units (1 - 3)
    pub size: f32,
    /// Twinkle phase offset (radians)
    pub phase: f32,
}

impl Star {
    /// Opacity at `time_secs`, pulsing gently around the base value
    pub fn alpha_at(&self, time_secs: f32) -> f32 {
        let pulse = 0.75 + 0.25 * (time_secs * 2.0 + self.phase).sin();
        (self.opacity * pulse).clamp(0.0, 1.0)
    }
}

/// Scatter `count` stars across the playfield
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize, tuning: &Tuning) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * tuning.viewport_width,
                rng.random::<f32>() * tuning.viewport_height,
            ),
            opacity: rng.random::<f32>() * 0.8 + 0.2,
            size: rng.random::<f32>() * 2.0 + 1.0,
            phase: rng.random::<f32>() * std::f32::consts::TAU,
        })
        .collect()
}

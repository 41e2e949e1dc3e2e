//! Obstacle generation
//!
//! Gap placement is the only random input to the simulation. It comes from a
//! [`GapSource`] so runs can be seeded and tests can script exact gaps.

use rand::{Rng, RngCore};

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Supplies uniform samples in `[0, 1)` for gap placement
pub trait GapSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> GapSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Create an obstacle at horizontal position `x` with a randomly placed gap
///
/// The gap top lands uniformly in [`Tuning::gap_top_range`], so both the top and
/// bottom segments keep at least `min_segment` of height.
pub fn generate_obstacle<S: GapSource + ?Sized>(x: f32, tuning: &Tuning, source: &mut S) -> Obstacle {
    let (lo, hi) = tuning.gap_top_range();
    let u = source.next_unit();
    // NaN falls through to 0.0
    let u = if u >= 0.0 { u.min(1.0) } else { 0.0 };
    let gap_top = lo + u * (hi - lo);

    Obstacle {
        x,
        gap_top,
        gap_bottom: gap_top + tuning.gap_height,
        passed: false,
    }
}

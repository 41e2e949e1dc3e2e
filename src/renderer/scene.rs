//! Frame composition
//!
//! Turns a [`Snapshot`] into one triangle list in game coordinates. Text (score,
//! prompts) is left to the page HUD.

use glam::Vec2;

use super::shapes::{Gradient, circle, gradient_rect, radial_circle, rect};
use super::stars::Star;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, Snapshot};
use crate::tuning::Tuning;

const BIRD_SEGMENTS: u32 = 24;
/// Fixed nose-down tilt per unit of gravity, in degrees
const TILT_PER_GRAVITY: f32 = 5.0;
const MAX_TILT_DEG: f32 = 45.0;
/// Border strip on the right side of each pipe
const PIPE_RIM: f32 = 4.0;

/// Build every vertex for one frame, back to front
///
/// While `intro` is set the title screen shows no bird.
pub fn build_scene(
    snapshot: &Snapshot,
    tuning: &Tuning,
    stars: &[Star],
    time_secs: f32,
    intro: bool,
) -> Vec<Vertex> {
    let field = Vec2::new(tuning.viewport_width, tuning.viewport_height);
    let mut vertices = Vec::with_capacity(6 * (2 + stars.len() + snapshot.obstacles.len() * 4) + 256);

    vertices.extend(gradient_rect(
        Vec2::ZERO,
        field,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
        Gradient::Vertical,
    ));

    for star in stars {
        let mut color = colors::STAR;
        color[3] = star.alpha_at(time_secs);
        vertices.extend(rect(star.pos, Vec2::splat(star.size), color));
    }

    for obstacle in &snapshot.obstacles {
        let width = tuning.obstacle_width;
        let bottom_height = tuning.viewport_height - obstacle.gap_bottom;
        let segments = [
            (Vec2::new(obstacle.x, 0.0), obstacle.gap_top),
            (Vec2::new(obstacle.x, obstacle.gap_bottom), bottom_height),
        ];

        for (min, height) in segments {
            vertices.extend(gradient_rect(
                min,
                Vec2::new(width, height),
                colors::PIPE_LIGHT,
                colors::PIPE_DARK,
                Gradient::Horizontal,
            ));
            vertices.extend(rect(
                Vec2::new(min.x + width - PIPE_RIM, min.y),
                Vec2::new(PIPE_RIM, height),
                colors::PIPE_DARK,
            ));
        }
    }

    if !(intro && snapshot.phase == GamePhase::NotStarted) {
        vertices.extend(actor(snapshot.actor_position, tuning));
    }

    if snapshot.phase == GamePhase::Over {
        vertices.extend(rect(Vec2::ZERO, field, colors::GAME_OVER_DIM));
    }

    vertices
}

fn tilt_radians(tuning: &Tuning) -> f32 {
    (tuning.gravity_step * TILT_PER_GRAVITY)
        .clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
        .to_radians()
}

/// Round bird with an eye, filling the actor's bounding box
///
/// The eye sits rotated by the fixed gravity tilt.
fn actor(pos: Vec2, tuning: &Tuning) -> Vec<Vertex> {
    let size = Vec2::new(tuning.actor_width, tuning.actor_height);
    let radius = size.min_element() / 2.0;
    let center = pos + size / 2.0;
    let tilt = Vec2::from_angle(tilt_radians(tuning));

    let mut vertices = radial_circle(
        center,
        radius,
        colors::BIRD_YELLOW,
        colors::BIRD_ORANGE,
        BIRD_SEGMENTS,
    );
    let eye = center + tilt.rotate(Vec2::new(radius * 0.45, -radius * 0.4));
    vertices.extend(circle(eye, radius * 0.28, colors::EYE_WHITE, 12));
    vertices.extend(circle(
        eye + tilt.rotate(Vec2::new(radius * 0.08, -radius * 0.04)),
        radius * 0.13,
        colors::PUPIL,
        8,
    ));
    vertices
}

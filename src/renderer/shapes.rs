//! Shape generation for 2D primitives
//!
//! All shapes are emitted in game coordinates (origin top-left, y down) as
//! triangle lists.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Which way a two-color gradient runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    /// `from` at the top edge, `to` at the bottom edge
    Vertical,
    /// `from` at the left edge, `to` at the right edge
    Horizontal,
}

/// Generate vertices for a solid axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, size, color, color, Gradient::Vertical)
}

/// Generate vertices for a rectangle with a linear two-color gradient
pub fn gradient_rect(
    min: Vec2,
    size: Vec2,
    from: [f32; 4],
    to: [f32; 4],
    direction: Gradient,
) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }

    let max = min + size;
    let (tl, tr, bl, br) = match direction {
        Gradient::Vertical => (from, from, to, to),
        Gradient::Horizontal => (from, to, from, to),
    };

    vec![
        Vertex::new(min.x, min.y, tl),
        Vertex::new(min.x, max.y, bl),
        Vertex::new(max.x, min.y, tr),
        Vertex::new(max.x, min.y, tr),
        Vertex::new(min.x, max.y, bl),
        Vertex::new(max.x, max.y, br),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    radial_circle(center, radius, color, color, segments)
}

/// Filled circle whose color blends from `inner` at the center to `outer` at the rim
pub fn radial_circle(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            outer,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            outer,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 28.0);
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        assert!(rect(Vec2::ZERO, Vec2::new(0.0, 10.0), [1.0; 4]).is_empty());
        assert!(rect(Vec2::ZERO, Vec2::new(10.0, -1.0), [1.0; 4]).is_empty());
    }

    #[test]
    fn test_vertical_gradient() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let v = gradient_rect(Vec2::ZERO, Vec2::splat(10.0), top, bottom, Gradient::Vertical);
        for vert in &v {
            let expected = if vert.position[1] == 0.0 { top } else { bottom };
            assert_eq!(vert.color, expected);
        }
    }

    #[test]
    fn test_circle_triangle_count() {
        let v = circle(Vec2::new(5.0, 5.0), 2.0, [1.0; 4], 12);
        assert_eq!(v.len(), 36);
        for vert in &v {
            let d = Vec2::from(vert.position).distance(Vec2::new(5.0, 5.0));
            assert!(d <= 2.0 + 1e-4);
        }
    }
}

//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in world coordinates
//! (origin bottom-left, y up).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{FISH_SIZE, OCEAN_HEIGHT, WINDOW_WIDTH};
use crate::sim::Facing;

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, max, color, color)
}

/// Rectangle shaded from `bottom` to `top`
pub fn gradient_rect(min: Vec2, max: Vec2, bottom: [f32; 4], top: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, bottom),
        Vertex::new(max.x, min.y, bottom),
        Vertex::new(max.x, max.y, top),
        Vertex::new(min.x, min.y, bottom),
        Vertex::new(max.x, max.y, top),
        Vertex::new(min.x, max.y, top),
    ]
}

/// Triangle fan from `center` through consecutive `rim` points
pub fn fan(center: Vec2, rim: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rim.len().saturating_sub(1) * 3);
    for pair in rim.windows(2) {
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            center + Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();
    fan(center, &rim, color)
}

/// Polyline drawn as quads `width` wide
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len().saturating_sub(1) * 6);
    let half = width / 2.0;

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Ocean body below the surface line
pub fn ocean() -> Vec<Vertex> {
    gradient_rect(
        Vec2::ZERO,
        Vec2::new(WINDOW_WIDTH, OCEAN_HEIGHT),
        colors::OCEAN_DEEP,
        colors::OCEAN_SURFACE,
    )
}

/// Height of wave line `layer` (0 = back) at `x`
pub fn wave_height(layer: usize, x: f32, offset: f32) -> f32 {
    let swell = match layer {
        0 => (x * 0.01 + offset * 0.5).sin() * 8.0 + (x * 0.02 - offset * 0.3).sin() * 4.0,
        1 => (x * 0.015 + offset * 0.8).sin() * 10.0 + (x * 0.03 + offset * 0.4).sin() * 5.0,
        _ => {
            (x * 0.02 + offset).sin() * 12.0
                + (x * 0.04 - offset * 0.7).sin() * 6.0
                + (x * 0.08 + offset * 1.5).sin() * 3.0
        }
    };
    OCEAN_HEIGHT + swell
}

/// Animated surface waves, back to front
///
/// With fewer than three layers the front-most ones are kept.
pub fn waves(offset: f32, layers: usize, points: usize) -> Vec<Vertex> {
    let layers = layers.min(3);
    let points = points.max(1);
    let mut vertices = Vec::new();

    for layer in (3 - layers)..3 {
        let line: Vec<Vec2> = (0..=points)
            .map(|i| {
                let x = WINDOW_WIDTH / points as f32 * i as f32;
                Vec2::new(x, wave_height(layer, x, offset))
            })
            .collect();
        let width = 2.0 + 0.5 * layer as f32;
        vertices.extend(polyline(&line, width, colors::WAVES[layer]));
    }

    vertices
}

/// A fish: half-oval body, fan tail and eye
pub fn fish(
    pos: Vec2,
    scale: f32,
    facing: Facing,
    body_color: [f32; 4],
    segments: usize,
) -> Vec<Vertex> {
    let dir = facing.sign();
    let segments = segments.max(2);
    let body_length = FISH_SIZE * 1.8 * scale;
    let body_height = FISH_SIZE * 1.2 * scale;

    let body: Vec<Vec2> = (0..=segments)
        .map(|i| {
            let angle = PI * i as f32 / segments as f32;
            pos + Vec2::new(
                dir * body_length * 0.4 * angle.cos(),
                body_height * 0.5 * angle.sin(),
            )
        })
        .collect();
    let mut vertices = fan(pos, &body, body_color);

    let tail_base = Vec2::new(pos.x - dir * body_length * 0.5, pos.y);
    let tail_length = FISH_SIZE * 0.6 * scale;
    let tail: Vec<Vec2> = (0..=8)
        .map(|i| {
            let angle = (PI / 3.0) * i as f32 / 8.0 - PI / 6.0;
            tail_base + Vec2::new(-dir * tail_length * angle.cos(), tail_length * angle.sin())
        })
        .collect();
    vertices.extend(fan(tail_base, &tail, colors::tail(body_color)));

    let eye = pos + Vec2::new(dir * body_length * 0.35, body_height * 0.15);
    let eye_size = FISH_SIZE * 0.15 * scale;
    vertices.extend(circle(eye, eye_size, colors::EYE_WHITE, 12));
    vertices.extend(circle(eye, eye_size * 0.6, colors::PUPIL, 12));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec2::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::ZERO, Vec2::new(10.0, 5.0), colors::PANEL);
        assert_eq!(v.len(), 6);
        let (lo, hi) = bounds(&v);
        assert_eq!(lo, Vec2::ZERO);
        assert_eq!(hi, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(5.0, 5.0), 2.0, colors::PUPIL, 12);
        assert_eq!(v.len(), 12 * 3);
    }

    #[test]
    fn test_fish_faces_heading() {
        let pos = Vec2::new(300.0, 200.0);
        let right = fish(pos, 1.0, Facing::Right, colors::PLAYER, 20);
        let left = fish(pos, 1.0, Facing::Left, colors::PLAYER, 20);
        assert_eq!(right.len() % 3, 0);

        // Tail sits behind the body, so a right-facing fish reaches further left
        let (r_lo, r_hi) = bounds(&right);
        let (l_lo, l_hi) = bounds(&left);
        assert!(pos.x - r_lo.x > r_hi.x - pos.x);
        assert!(l_hi.x - pos.x > pos.x - l_lo.x);
    }

    #[test]
    fn test_fish_scales_with_size() {
        let pos = Vec2::new(300.0, 200.0);
        let (lo1, hi1) = bounds(&fish(pos, 1.0, Facing::Right, colors::RED_FISH, 20));
        let (lo2, hi2) = bounds(&fish(pos, 2.0, Facing::Right, colors::RED_FISH, 20));
        assert!((hi2 - lo2).x > (hi1 - lo1).x * 1.9);
    }

    #[test]
    fn test_waves_stay_near_surface() {
        let v = waves(1.3, 3, 50);
        assert_eq!(v.len(), 3 * 50 * 6);
        let (lo, hi) = bounds(&v);
        assert!(lo.y > OCEAN_HEIGHT - 25.0);
        assert!(hi.y < OCEAN_HEIGHT + 25.0);
    }

    #[test]
    fn test_wave_layers_clamped() {
        assert_eq!(waves(0.0, 1, 10).len(), 10 * 6);
        assert_eq!(waves(0.0, 9, 10).len(), 3 * 10 * 6);
    }
}

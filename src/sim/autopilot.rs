//! Idle/demo mode controller
//!
//! Plays the game through the same pointer interface a human uses: dodge
//! the nearest fish that could eat us, otherwise swim for the nearest meal.

use glam::Vec2;

use super::collision::can_eat;
use super::fish::Fish;
use super::state::GameState;
use crate::consts::*;
use crate::world_to_screen;

/// How far the simulated pointer may travel per frame
pub const AUTOPILOT_STEP: f32 = 12.0;

/// Next pointer sample (screen coords, y down) for the current state
pub fn pointer_target(state: &GameState) -> (f32, f32) {
    let player = &state.player;
    let radius = player.radius();

    let target = match nearest(state, radius, false) {
        Some(threat) if threat.pos.distance(player.pos) < FLEE_DISTANCE => {
            let away = (player.pos - threat.pos).normalize_or_zero();
            player.pos + away * AUTOPILOT_STEP
        }
        _ => match nearest(state, radius, true) {
            Some(meal) => {
                let to_meal = meal.pos - player.pos;
                player.pos + to_meal.clamp_length_max(AUTOPILOT_STEP)
            }
            None => player.pos,
        },
    };

    let target = target.clamp(Vec2::ZERO, Vec2::new(WINDOW_WIDTH, OCEAN_HEIGHT));
    world_to_screen(target)
}

/// Closest fish that is (or is not) edible at `radius`
fn nearest(state: &GameState, radius: f32, edible: bool) -> Option<&Fish> {
    let from = state.player.pos;
    state
        .fish
        .iter()
        .filter(|f| can_eat(radius, f.radius()) == edible)
        .min_by(|a, b| {
            a.pos
                .distance_squared(from)
                .partial_cmp(&b.pos.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

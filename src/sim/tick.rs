//! Frame and countdown ticks
//!
//! Two independent clocks drive a round: `tick` runs every frame (50 ms) and
//! moves fish, resolves collisions and checks for a win; `countdown` runs
//! once a second and ends the round when time runs out. Pointer samples can
//! arrive between either.

use super::autopilot;
use super::collision::{Encounter, player_touches, resolve};
use super::state::{GameEvent, GamePhase, GameState, LossCause};
use super::steering::steer;

/// Input for a single frame tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer sample (screen coords, y down), if it moved
    pub pointer: Option<(f32, f32)>,
    /// Idle/demo mode - the autopilot moves the pointer
    pub idle_mode: bool,
}

/// Feed one pointer sample to the player
pub fn pointer_moved(state: &mut GameState, x: f32, y: f32) {
    state.player.follow_pointer(x, y, state.prev_pointer_x);
    state.prev_pointer_x = x;
}

/// Advance the round by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let pointer = if input.idle_mode && state.is_playing() {
        Some(autopilot::pointer_target(state))
    } else {
        input.pointer
    };
    if let Some((x, y)) = pointer {
        pointer_moved(state, x, y);
    }

    if state.is_over() {
        return;
    }
    state.frame_ticks += 1;

    // Steering reacts to the player as it was when the frame began; growth
    // from meals later in the same frame only affects collisions.
    let player_pos = state.player.pos;
    let steer_radius = state.player.radius();

    let mut i = 0;
    while i < state.fish.len() {
        steer(&mut state.fish[i], player_pos, steer_radius);

        if !player_touches(&state.player, &state.fish[i]) {
            i += 1;
            continue;
        }

        match resolve(&state.player, &state.fish[i]) {
            Encounter::Eat { points, growth } => {
                let fish = state.fish.remove(i);
                state.award(points);
                state.player.grow(growth);
                log::debug!(
                    "Ate {:?} {:?} fish #{} (+{}), size now {:.2}x",
                    fish.color,
                    fish.size_class,
                    fish.id,
                    points,
                    state.player.scale()
                );
                state.events.push(GameEvent::FishEaten {
                    id: fish.id,
                    color: fish.color,
                    size_class: fish.size_class,
                    points,
                });
            }
            Encounter::Lethal => {
                let fish = &state.fish[i];
                let (id, color) = (fish.id, fish.color);
                state.events.push(GameEvent::PlayerEaten { id, color });
                state.end_round(GamePhase::Lost(LossCause::Eaten { by: id }));
                break;
            }
        }
    }

    if state.is_playing() && state.fish.is_empty() {
        state.events.push(GameEvent::RosterCleared);
        state.end_round(GamePhase::Won);
    }
}

/// One-second countdown tick
pub fn countdown(state: &mut GameState) {
    if state.is_playing() && state.time_left > 0 {
        state.time_left -= 1;
        log::trace!("{}s left", state.time_left);
        if state.time_left == 0 {
            state.events.push(GameEvent::TimeUp);
            state.end_round(GamePhase::Lost(LossCause::TimeUp));
        }
    }
}

/// Hand the accumulated events to the caller
pub fn drain_events(state: &mut GameState) -> Vec<GameEvent> {
    std::mem::take(&mut state.events)
}

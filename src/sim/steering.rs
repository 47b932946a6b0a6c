//! NPC steering: flee, chase, or patrol
//!
//! Each frame a fish looks at the player once and picks one of three moves.
//! Fleeing wins over chasing; anything else keeps the patrol heading.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fish::{Facing, Fish, random_depth};
use crate::consts::*;

/// Which steering rule drove a fish this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Player is bigger and close: swim straight away
    Flee,
    /// Player is smaller and close, and this fish is red or large
    Chase,
    /// Keep the horizontal heading
    Patrol,
}

/// Pick a behavior given the distance to the player and both radii
pub fn choose_behavior(fish: &Fish, dist: f32, player_radius: f32) -> Behavior {
    let own_radius = fish.radius();
    if player_radius > own_radius && dist < FLEE_DISTANCE {
        Behavior::Flee
    } else if fish.is_aggressive() && player_radius < own_radius && dist < CHASE_DISTANCE {
        Behavior::Chase
    } else {
        Behavior::Patrol
    }
}

/// Velocity for a behavior, in world units per frame
///
/// A fish sitting exactly on the player has no direction to go and holds
/// still for the frame.
pub fn velocity(fish: &Fish, behavior: Behavior, to_player: Vec2) -> Vec2 {
    match behavior {
        Behavior::Flee => -to_player.normalize_or_zero() * FISH_SPEED * FLEE_SPEED,
        Behavior::Chase => to_player.normalize_or_zero() * FISH_SPEED * CHASE_SPEED,
        Behavior::Patrol => Vec2::new(fish.heading, 0.0),
    }
}

/// Advance one fish by one frame of steering
///
/// Flee and chase re-aim the patrol heading so the fish keeps swimming the
/// way it last faced. Position wraps horizontally (keeping depth) and is
/// clamped vertically inside the water.
pub fn steer(fish: &mut Fish, player_pos: Vec2, player_radius: f32) -> Behavior {
    let to_player = player_pos - fish.pos;
    let behavior = choose_behavior(fish, to_player.length(), player_radius);
    let step = velocity(fish, behavior, to_player);

    if behavior != Behavior::Patrol {
        fish.heading = Facing::from_dx(step.x).sign() * FISH_SPEED;
    }

    fish.pos += step;
    fish.pos.x = wrap_x(fish.pos.x);
    fish.pos.y = clamp_depth(fish.pos.y);
    behavior
}

/// Plain patrol move without looking at the player
///
/// A fish leaving one side reappears on the other at a fresh random depth.
/// Returns true when the fish wrapped.
pub fn patrol_step(fish: &mut Fish, rng: &mut impl Rng) -> bool {
    fish.pos.x += fish.heading;
    if fish.pos.x > WINDOW_WIDTH {
        fish.pos.x = 0.0;
        fish.pos.y = random_depth(rng);
        true
    } else if fish.pos.x < 0.0 {
        fish.pos.x = WINDOW_WIDTH;
        fish.pos.y = random_depth(rng);
        true
    } else {
        false
    }
}

/// Past the right edge -> left edge and vice versa
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    if x > WINDOW_WIDTH {
        0.0
    } else if x < 0.0 {
        WINDOW_WIDTH
    } else {
        x
    }
}

/// Keep a depth `DEPTH_MARGIN` away from the floor and the surface
#[inline]
pub fn clamp_depth(y: f32) -> f32 {
    y.clamp(DEPTH_MARGIN, OCEAN_HEIGHT - DEPTH_MARGIN)
}

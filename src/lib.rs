//! Fish Frenzy - eat smaller fish, avoid bigger ones, beat the clock
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, collisions, round state)
//! - `platform`: Repeating timers that drive the frame and countdown ticks
//! - `renderer`: WebGPU rendering pipeline and scene geometry
//! - `settings`: Presentation preferences
//! - `ui`: HUD and banner text

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World extents (origin bottom-left, y up)
    pub const WINDOW_WIDTH: f32 = 1200.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Water surface height; the strip above is sky/HUD
    pub const OCEAN_HEIGHT: f32 = 500.0;

    /// Roster size at the start of every round
    pub const NUM_FISH: usize = 20;
    /// Countdown allowance in seconds
    pub const INITIAL_TIME: u32 = 50;

    /// Drawing size of a fish at scale 1.0
    pub const FISH_SIZE: f32 = 20.0;
    /// Hitbox radius at scale 1.0
    pub const COLLISION_RADIUS: f32 = 15.0;
    /// Patrol speed in world units per frame
    pub const FISH_SPEED: f32 = 0.5;

    /// Player growth
    pub const GROWTH_INCREMENT: f32 = 0.05;
    pub const INITIAL_PLAYER_SIZE: f32 = 1.0;
    pub const MAX_PLAYER_SIZE: f32 = 2.5;

    /// NPC size classes
    pub const LARGE_FISH_SCALE: f32 = 1.5;
    pub const SMALL_FISH_SCALE: f32 = 0.9;

    /// Steering thresholds and speed multipliers
    pub const FLEE_DISTANCE: f32 = 200.0;
    pub const CHASE_DISTANCE: f32 = 250.0;
    pub const FLEE_SPEED: f32 = 1.5;
    pub const CHASE_SPEED: f32 = 1.3;

    /// NPCs keep this far from the sea floor and the surface
    pub const DEPTH_MARGIN: f32 = 20.0;
    /// Spawn/respawn depth band [min, max)
    pub const SPAWN_DEPTH_MIN: f32 = 20.0;
    pub const SPAWN_DEPTH_MAX: f32 = OCEAN_HEIGHT - 30.0;

    /// Player may eat anything down to 95% of its own radius
    pub const EAT_TOLERANCE: f32 = 0.95;

    /// Points per fish
    pub const RED_POINTS: u32 = 3;
    pub const YELLOW_POINTS: u32 = 1;
    pub const YELLOW_LARGE_POINTS: u32 = 2;

    /// Chance (out of 10) that a spawned fish is red / large
    pub const RED_CHANCE_IN_10: u32 = 3;
    pub const LARGE_CHANCE_IN_10: u32 = 3;

    /// Tick intervals
    pub const FRAME_INTERVAL_MS: f64 = 50.0;
    pub const COUNTDOWN_INTERVAL_MS: f64 = 1000.0;
}

/// Center of the playfield in world coordinates
#[inline]
pub fn world_center() -> Vec2 {
    Vec2::new(consts::WINDOW_WIDTH / 2.0, consts::WINDOW_HEIGHT / 2.0)
}

/// Convert a pointer sample (screen coords, y down) to world coords (y up)
#[inline]
pub fn screen_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, consts::WINDOW_HEIGHT - y)
}

/// Convert world coords (y up) back to a pointer sample (y down)
#[inline]
pub fn world_to_screen(pos: Vec2) -> (f32, f32) {
    (pos.x, consts::WINDOW_HEIGHT - pos.y)
}

//! Fish entities: the pointer-driven player and the NPC roster
//!
//! Size scale is the only thing that separates predator from prey. Every
//! hitbox is `COLLISION_RADIUS * scale`, so growing the player directly
//! enlarges what it can touch and what it can eat.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{screen_to_world, world_center};

/// Body color; decides points, growth and aggression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FishColor {
    /// Aggressive and valuable
    Red,
    /// Passive and common
    Yellow,
}

/// Size class, rolled independently of color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Large,
    Small,
}

impl SizeClass {
    /// Fixed spawn scale for this class
    pub fn scale(self) -> f32 {
        match self {
            SizeClass::Large => LARGE_FISH_SCALE,
            SizeClass::Small => SMALL_FISH_SCALE,
        }
    }
}

/// Which way the body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing for a horizontal velocity; zero faces right
    #[inline]
    pub fn from_dx(dx: f32) -> Self {
        if dx < 0.0 { Facing::Left } else { Facing::Right }
    }

    /// +1.0 for right, -1.0 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player's fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Grows on every meal, never shrinks within a round
    scale: f32,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: world_center(),
            scale: INITIAL_PLAYER_SIZE,
            facing: Facing::Right,
        }
    }
}

impl Player {
    /// Current size scale
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current hitbox radius
    #[inline]
    pub fn radius(&self) -> f32 {
        COLLISION_RADIUS * self.scale
    }

    /// Grow by `amount`, clamped to `MAX_PLAYER_SIZE`
    ///
    /// Negative amounts are ignored so the scale stays monotonic.
    pub fn grow(&mut self, amount: f32) {
        if amount > 0.0 && self.scale < MAX_PLAYER_SIZE {
            self.scale = (self.scale + amount).min(MAX_PLAYER_SIZE);
        }
    }

    /// Lock the fish to a pointer sample (screen coords, y down)
    ///
    /// Facing flips only when the pointer actually moved horizontally.
    pub fn follow_pointer(&mut self, x: f32, y: f32, prev_x: f32) {
        if x > prev_x {
            self.facing = Facing::Right;
        } else if x < prev_x {
            self.facing = Facing::Left;
        }
        self.pos = screen_to_world(x, y);
    }
}

/// A non-player fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: u32,
    pub pos: Vec2,
    pub color: FishColor,
    pub size_class: SizeClass,
    /// Fixed at spawn
    scale: f32,
    /// Signed patrol step (±`FISH_SPEED`); its sign is the facing
    pub heading: f32,
}

impl Fish {
    /// Create a fish whose scale follows its size class
    pub fn new(id: u32, pos: Vec2, color: FishColor, size_class: SizeClass, heading: f32) -> Self {
        Self::with_scale(id, pos, color, size_class, size_class.scale(), heading)
    }

    /// Create a fish with an explicit scale
    pub fn with_scale(
        id: u32,
        pos: Vec2,
        color: FishColor,
        size_class: SizeClass,
        scale: f32,
        heading: f32,
    ) -> Self {
        Self {
            id,
            pos,
            color,
            size_class,
            scale,
            heading,
        }
    }

    /// Roll a fresh fish: 30% red, 30% large, random spot and heading
    pub fn spawn(id: u32, rng: &mut impl Rng) -> Self {
        let color = if rng.random_range(0..10) < RED_CHANCE_IN_10 {
            FishColor::Red
        } else {
            FishColor::Yellow
        };
        let size_class = if rng.random_range(0..10) < LARGE_CHANCE_IN_10 {
            SizeClass::Large
        } else {
            SizeClass::Small
        };
        let pos = Vec2::new(rng.random_range(0.0..WINDOW_WIDTH), random_depth(rng));
        let heading = if rng.random_bool(0.5) {
            FISH_SPEED
        } else {
            -FISH_SPEED
        };
        Self::new(id, pos, color, size_class, heading)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Hitbox radius
    #[inline]
    pub fn radius(&self) -> f32 {
        COLLISION_RADIUS * self.scale
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        Facing::from_dx(self.heading)
    }

    #[inline]
    pub fn is_large(&self) -> bool {
        self.size_class == SizeClass::Large
    }

    /// Red or large fish hunt players smaller than themselves
    #[inline]
    pub fn is_aggressive(&self) -> bool {
        self.color == FishColor::Red || self.is_large()
    }

    /// Points awarded for eating this fish
    pub fn points(&self) -> u32 {
        match (self.color, self.size_class) {
            (FishColor::Red, _) => RED_POINTS,
            (FishColor::Yellow, SizeClass::Large) => YELLOW_LARGE_POINTS,
            (FishColor::Yellow, SizeClass::Small) => YELLOW_POINTS,
        }
    }

    /// Scale the player gains by eating this fish
    pub fn growth(&self) -> f32 {
        match self.color {
            FishColor::Red => GROWTH_INCREMENT * 2.0,
            FishColor::Yellow => GROWTH_INCREMENT,
        }
    }
}

/// Random depth inside the spawn band
pub fn random_depth(rng: &mut impl Rng) -> f32 {
    rng.random_range(SPAWN_DEPTH_MIN..SPAWN_DEPTH_MAX)
}

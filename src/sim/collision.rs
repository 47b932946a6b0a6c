//! Circle collision and the eat-or-be-eaten rule
//!
//! Only the player is ever tested, once per NPC per frame. NPCs pass through
//! each other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fish::{Fish, Player};
use crate::consts::EAT_TOLERANCE;

/// Strict overlap of two circles (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let combined = radius_a + radius_b;
    a.distance_squared(b) < combined * combined
}

/// Whether the player's hitbox overlaps a fish
#[inline]
pub fn player_touches(player: &Player, fish: &Fish) -> bool {
    circles_overlap(player.pos, player.radius(), fish.pos, fish.radius())
}

/// Player may eat anything whose radius is at most 1/0.95 of its own
#[inline]
pub fn can_eat(player_radius: f32, fish_radius: f32) -> bool {
    player_radius >= fish_radius * EAT_TOLERANCE
}

/// Outcome of the player touching a fish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Encounter {
    /// Player swallows the fish
    Eat { points: u32, growth: f32 },
    /// Fish is too big; the round is lost
    Lethal,
}

/// Decide what happens when the player touches `fish`
///
/// Color only changes the reward. Any fish the player is too small for is
/// lethal, red or yellow.
pub fn resolve(player: &Player, fish: &Fish) -> Encounter {
    if can_eat(player.radius(), fish.radius()) {
        Encounter::Eat {
            points: fish.points(),
            growth: fish.growth(),
        }
    } else {
        Encounter::Lethal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::fish::{FishColor, SizeClass};

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 10.0, Vec2::new(15.0, 0.0), 10.0));
        // Exactly touching is not a collision
        assert!(!circles_overlap(a, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(!circles_overlap(a, 10.0, Vec2::new(30.0, 0.0), 10.0));
    }

    #[test]
    fn test_player_touches_uses_scaled_radii() {
        let player = Player::default();
        let near = Fish::new(1, player.pos + Vec2::new(28.0, 0.0), FishColor::Yellow, SizeClass::Small, FISH_SPEED);
        // 15 + 13.5 = 28.5 > 28
        assert!(player_touches(&player, &near));

        let far = Fish::new(2, player.pos + Vec2::new(29.0, 0.0), FishColor::Yellow, SizeClass::Small, FISH_SPEED);
        assert!(!player_touches(&player, &far));

        let large = Fish::new(3, player.pos + Vec2::new(37.0, 0.0), FishColor::Yellow, SizeClass::Large, FISH_SPEED);
        // 15 + 22.5 = 37.5 > 37
        assert!(player_touches(&player, &large));
    }

    #[test]
    fn test_can_eat_tolerance() {
        assert!(can_eat(15.0, 15.0));
        assert!(can_eat(15.0, 15.0 / EAT_TOLERANCE - 0.01));
        assert!(!can_eat(15.0, 16.0));
        assert!(can_eat(15.0, 10.0));
    }

    #[test]
    fn test_resolve_red_and_yellow() {
        let player = Player::default();
        let small_red = Fish::new(1, player.pos, FishColor::Red, SizeClass::Small, FISH_SPEED);
        assert_eq!(
            resolve(&player, &small_red),
            Encounter::Eat { points: 3, growth: GROWTH_INCREMENT * 2.0 }
        );

        let large_red = Fish::new(2, player.pos, FishColor::Red, SizeClass::Large, FISH_SPEED);
        assert_eq!(resolve(&player, &large_red), Encounter::Lethal);

        let large_yellow = Fish::new(3, player.pos, FishColor::Yellow, SizeClass::Large, FISH_SPEED);
        assert_eq!(resolve(&player, &large_yellow), Encounter::Lethal);
    }
}

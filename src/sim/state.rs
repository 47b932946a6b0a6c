//! Round state and core simulation types
//!
//! Everything a round needs lives in one `GameState` value; there are no
//! globals. All randomness comes from the state's seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fish::{Fish, FishColor, Player, SizeClass};
use crate::consts::*;

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Countdown reached zero
    TimeUp,
    /// Player touched a fish it was too small to eat
    Eaten { by: u32 },
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Every fish was eaten
    Won,
    Lost(LossCause),
}

/// Something that happened during a frame or countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FishEaten {
        id: u32,
        color: FishColor,
        size_class: SizeClass,
        points: u32,
    },
    PlayerEaten {
        id: u32,
        color: FishColor,
    },
    TimeUp,
    RosterCleared,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this round was generated from
    pub seed: u64,
    rng: Pcg32,
    /// Never decreases within a round
    pub score: u32,
    /// Seconds remaining; never increases within a round
    pub time_left: u32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live NPCs; only shrinks during a round
    pub fish: Vec<Fish>,
    /// Last horizontal pointer sample, for facing
    pub prev_pointer_x: f32,
    /// Frame ticks processed while playing
    pub frame_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new round with a freshly rolled roster
    pub fn new(seed: u64) -> Self {
        let mut state = Self::empty(seed);
        state.populate(NUM_FISH);
        log::info!("Round started (seed {}, {} fish)", seed, state.fish.len());
        state
    }

    /// Create a round with a hand-picked roster
    ///
    /// Entity ids continue after the highest id in `fish`.
    pub fn with_fish(seed: u64, fish: Vec<Fish>) -> Self {
        let mut state = Self::empty(seed);
        state.next_id = fish.iter().map(|f| f.id + 1).max().unwrap_or(1);
        state.fish = fish;
        state
    }

    fn empty(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_left: INITIAL_TIME,
            phase: GamePhase::Playing,
            player: Player::default(),
            fish: Vec::with_capacity(NUM_FISH),
            prev_pointer_x: WINDOW_WIDTH / 2.0,
            frame_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset everything and roll a new roster from `seed`
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn populate(&mut self, count: usize) {
        for _ in 0..count {
            let id = self.next_entity_id();
            let fish = Fish::spawn(id, &mut self.rng);
            self.fish.push(fish);
        }
    }

    /// The round's random source
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        !self.is_playing()
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Move from Playing to a final phase; later calls are ignored
    pub fn end_round(&mut self, phase: GamePhase) {
        if !self.is_playing() || phase == GamePhase::Playing {
            return;
        }
        self.phase = phase;
        match phase {
            GamePhase::Won => log::info!("Round won with score {}", self.score),
            GamePhase::Lost(LossCause::TimeUp) => {
                log::info!("Time up! Final score {}", self.score)
            }
            GamePhase::Lost(LossCause::Eaten { by }) => {
                log::info!("Eaten by fish #{} with score {}", by, self.score)
            }
            GamePhase::Playing => {}
        }
    }

    /// Add points; the score never goes down
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_round() {
        let state = GameState::new(42);
        assert_eq!(state.fish.len(), NUM_FISH);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, INITIAL_TIME);
        assert!(state.is_playing());
        assert_eq!(state.player.scale(), INITIAL_PLAYER_SIZE);

        // Ids are unique and ascending
        let ids: Vec<u32> = state.fish.iter().map(|f| f.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_same_seed_same_roster() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        for (fa, fb) in a.fish.iter().zip(&b.fish) {
            assert_eq!(fa.pos, fb.pos);
            assert_eq!(fa.color, fb.color);
            assert_eq!(fa.size_class, fb.size_class);
        }
    }

    #[test]
    fn test_end_round_only_once() {
        let mut state = GameState::new(1);
        state.end_round(GamePhase::Lost(LossCause::TimeUp));
        state.end_round(GamePhase::Won);
        assert_eq!(state.phase, GamePhase::Lost(LossCause::TimeUp));
        assert!(state.is_over());
        assert!(!state.is_won());
    }

    #[test]
    fn test_with_fish_continues_ids() {
        let fish = vec![Fish::new(
            7,
            Vec2::new(10.0, 10.0),
            FishColor::Yellow,
            SizeClass::Small,
            FISH_SPEED,
        )];
        let mut state = GameState::with_fish(5, fish);
        assert_eq!(state.next_entity_id(), 8);
    }
}

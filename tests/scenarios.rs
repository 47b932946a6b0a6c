//! End-to-end round scenarios

use fish_frenzy::consts::*;
use fish_frenzy::sim::{
    Fish, FishColor, GameEvent, GamePhase, GameState, LossCause, SizeClass, Snapshot, TickInput,
    countdown, drain_events, pointer_moved, tick,
};
use fish_frenzy::world_center;
use glam::Vec2;

fn far_fish(id: u32) -> Fish {
    Fish::new(id, Vec2::new(50.0, 40.0), FishColor::Yellow, SizeClass::Small, FISH_SPEED)
}

#[test]
fn red_fish_smaller_than_player_is_eaten() {
    let center = world_center();
    // Radius 10 against a player radius of 15
    let red = Fish::with_scale(1, center, FishColor::Red, SizeClass::Small, 10.0 / COLLISION_RADIUS, FISH_SPEED);
    let mut state = GameState::with_fish(1, vec![red, far_fish(2)]);

    tick(&mut state, &TickInput::default());

    assert_eq!(state.score, 3);
    assert!((state.player.scale() - 1.10).abs() < 1e-5);
    assert_eq!(state.fish.len(), 1);
    assert!(state.is_playing());
}

#[test]
fn large_yellow_fish_bigger_than_player_is_lethal() {
    let center = world_center();
    // Radius 20 needs a player radius of 19; the player has 15
    let yellow = Fish::with_scale(1, center, FishColor::Yellow, SizeClass::Large, 20.0 / COLLISION_RADIUS, FISH_SPEED);
    let mut state = GameState::with_fish(1, vec![yellow, far_fish(2)]);

    tick(&mut state, &TickInput::default());

    assert_eq!(state.phase, GamePhase::Lost(LossCause::Eaten { by: 1 }));
    assert!(!state.is_won());
    assert_eq!(state.score, 0);
    // Lethal encounters leave the roster alone
    assert_eq!(state.fish.len(), 2);
    assert_eq!(
        drain_events(&mut state),
        vec![GameEvent::PlayerEaten { id: 1, color: FishColor::Yellow }]
    );
}

#[test]
fn countdown_ends_round_exactly_at_fiftieth_tick() {
    let mut state = GameState::new(77);
    assert_eq!(state.time_left, 50);

    for n in 1..=50 {
        assert!(state.is_playing(), "round ended early at tick {n}");
        countdown(&mut state);
    }

    assert_eq!(state.time_left, 0);
    assert_eq!(state.phase, GamePhase::Lost(LossCause::TimeUp));
    assert_eq!(state.score, 0);
    assert!(!state.is_won());
}

#[test]
fn restart_after_loss_resets_everything() {
    let mut state = GameState::new(5);
    pointer_moved(&mut state, 100.0, 100.0);
    state.award(7);
    state.player.grow(0.3);
    state.fish.truncate(3);
    state.end_round(GamePhase::Lost(LossCause::TimeUp));

    state.restart(6);

    assert_eq!(state.score, 0);
    assert_eq!(state.time_left, 50);
    assert_eq!(state.player.scale(), 1.0);
    assert_eq!(state.player.pos, world_center());
    assert_eq!(state.fish.len(), NUM_FISH);
    assert!(state.is_playing());
    assert!(!state.is_won());

    let snap = Snapshot::capture(&state);
    assert!(!snap.game_over);
    assert!(!snap.won);
}

#[test]
fn eating_whole_roster_wins() {
    let center = world_center();
    let roster: Vec<Fish> = (1..=3)
        .map(|id| Fish::new(id, center, FishColor::Yellow, SizeClass::Small, FISH_SPEED))
        .collect();
    let mut state = GameState::with_fish(1, roster);

    tick(&mut state, &TickInput::default());

    assert!(state.is_won());
    assert_eq!(state.score, 3);

    // A won round ignores the clock
    countdown(&mut state);
    assert!(state.is_won());
    assert_eq!(state.time_left, INITIAL_TIME);
}

#[test]
fn time_up_beats_an_unfinished_roster() {
    let mut state = GameState::with_fish(1, vec![far_fish(1)]);
    pointer_moved(&mut state, 1100.0, 100.0);
    for _ in 0..INITIAL_TIME {
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        countdown(&mut state);
    }
    assert_eq!(state.phase, GamePhase::Lost(LossCause::TimeUp));
    assert_eq!(state.fish.len(), 1);
}

#[test]
fn autopilot_round_terminates() {
    let mut state = GameState::new(2024);
    let input = TickInput {
        pointer: None,
        idle_mode: true,
    };
    for _ in 0..INITIAL_TIME {
        for _ in 0..20 {
            tick(&mut state, &input);
        }
        countdown(&mut state);
    }
    assert!(state.is_over());
    assert!(state.fish.len() <= NUM_FISH);
}

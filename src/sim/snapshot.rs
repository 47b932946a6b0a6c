//! Read-only view of a round for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::fish::{Facing, FishColor, SizeClass};
use super::state::GameState;

/// The player as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub scale: f32,
    pub facing: Facing,
}

/// One NPC as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FishView {
    pub id: u32,
    pub pos: Vec2,
    pub color: FishColor,
    pub size_class: SizeClass,
    pub scale: f32,
    pub facing: Facing,
}

/// Everything a frame needs to render, captured after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub fish: Vec<FishView>,
    pub score: u32,
    pub time_left: u32,
    pub game_over: bool,
    pub won: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerView {
                pos: state.player.pos,
                scale: state.player.scale(),
                facing: state.player.facing,
            },
            fish: state
                .fish
                .iter()
                .map(|f| FishView {
                    id: f.id,
                    pos: f.pos,
                    color: f.color,
                    size_class: f.size_class,
                    scale: f.scale(),
                    facing: f.facing(),
                })
                .collect(),
            score: state.score,
            time_left: state.time_left,
            game_over: state.is_over(),
            won: state.is_won(),
        }
    }
}

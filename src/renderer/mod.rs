//! WebGPU rendering module
//!
//! The scene is rebuilt every frame from a `Snapshot` as one triangle list
//! and drawn with a single vertex-color pipeline. Text lives outside the
//! canvas (see `ui`).

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::settings::Settings;
use crate::sim::{FishColor, Snapshot};
use vertex::colors;

/// Wave offset wraps back to zero past this
const WAVE_WRAP: f32 = 2.0 * std::f32::consts::PI * 100.0;

/// Surface wave animation phase, advanced once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveClock {
    pub offset: f32,
}

impl WaveClock {
    pub fn step(&mut self) {
        self.offset += 0.03;
        if self.offset > WAVE_WRAP {
            self.offset = 0.0;
        }
    }
}

/// Build the whole frame
pub fn scene_vertices(snap: &Snapshot, waves: &WaveClock, settings: &Settings) -> Vec<Vertex> {
    let quality = settings.quality;
    let mut vertices = shapes::ocean();
    vertices.extend(shapes::waves(
        waves.offset,
        quality.wave_layers(),
        quality.wave_points(),
    ));

    if snap.game_over {
        vertices.extend(shapes::rect(
            Vec2::new(200.0, 150.0),
            Vec2::new(1000.0, 450.0),
            colors::PANEL,
        ));
        return vertices;
    }

    // HUD backing panels (score/size on the left, time on the right)
    vertices.extend(shapes::rect(
        Vec2::new(0.0, WINDOW_HEIGHT - 40.0),
        Vec2::new(150.0, WINDOW_HEIGHT),
        colors::PANEL,
    ));
    vertices.extend(shapes::rect(
        Vec2::new(WINDOW_WIDTH - 150.0, WINDOW_HEIGHT - 40.0),
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        colors::PANEL,
    ));

    let segments = quality.body_segments();
    vertices.extend(shapes::fish(
        snap.player.pos,
        snap.player.scale,
        snap.player.facing,
        colors::PLAYER,
        segments,
    ));
    for fish in &snap.fish {
        let color = match fish.color {
            FishColor::Red => colors::RED_FISH,
            FishColor::Yellow => colors::YELLOW_FISH,
        };
        vertices.extend(shapes::fish(fish.pos, fish.scale, fish.facing, color, segments));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState, LossCause};

    #[test]
    fn test_wave_clock_wraps() {
        let mut clock = WaveClock { offset: WAVE_WRAP - 0.01 };
        clock.step();
        assert_eq!(clock.offset, 0.0);
        clock.step();
        assert!((clock.offset - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_scene_draws_every_fish_while_playing() {
        let settings = Settings::default();
        let mut state = GameState::new(4);
        let full = scene_vertices(&Snapshot::capture(&state), &WaveClock::default(), &settings);
        state.fish.truncate(5);
        let fewer = scene_vertices(&Snapshot::capture(&state), &WaveClock::default(), &settings);
        assert!(full.len() > fewer.len());
        assert_eq!(full.len() % 3, 0);
    }

    #[test]
    fn test_game_over_hides_fish() {
        let settings = Settings::default();
        let mut state = GameState::new(4);
        state.end_round(GamePhase::Lost(LossCause::TimeUp));
        let over = scene_vertices(&Snapshot::capture(&state), &WaveClock::default(), &settings);
        state.fish.clear();
        let empty = scene_vertices(&Snapshot::capture(&state), &WaveClock::default(), &settings);
        assert_eq!(over.len(), empty.len());
    }
}

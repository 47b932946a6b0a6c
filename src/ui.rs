//! HUD and game-over text
//!
//! Pure formatting from a `Snapshot`; the front end decides where it goes
//! (DOM elements in the browser, stdout in the headless demo).

use crate::sim::Snapshot;

/// Prompt shown under the game-over banner
pub const RESTART_PROMPT: &str = "Press F2 to Play Again";

/// HUD lines for a running round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub size: String,
    pub time: String,
}

impl HudText {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Self {
            score: format!("Score: {}", snap.score),
            size: format!("Size: {:.2}x", snap.player.scale),
            time: format!("Time: {}", snap.time_left),
        }
    }
}

/// Game-over panel text, if the round has ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub score_line: String,
    pub prompt: &'static str,
}

impl Banner {
    pub fn from_snapshot(snap: &Snapshot) -> Option<Self> {
        if !snap.game_over {
            return None;
        }
        let (title, score_line) = if snap.won {
            ("YOU WIN!", format!("Final Score: {}", snap.score))
        } else {
            ("GAME OVER!", format!("Score: {}", snap.score))
        };
        Some(Self {
            title,
            score_line,
            prompt: RESTART_PROMPT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState, LossCause};

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(1);
        state.score = 12;
        state.player.grow(0.25);
        let hud = HudText::from_snapshot(&Snapshot::capture(&state));
        assert_eq!(hud.score, "Score: 12");
        assert_eq!(hud.size, "Size: 1.25x");
        assert_eq!(hud.time, "Time: 50");
    }

    #[test]
    fn test_banner() {
        let mut state = GameState::new(1);
        assert!(Banner::from_snapshot(&Snapshot::capture(&state)).is_none());

        state.score = 9;
        state.end_round(GamePhase::Lost(LossCause::TimeUp));
        let banner = Banner::from_snapshot(&Snapshot::capture(&state)).unwrap();
        assert_eq!(banner.title, "GAME OVER!");
        assert_eq!(banner.score_line, "Score: 9");

        let mut state = GameState::new(1);
        state.score = 30;
        state.end_round(GamePhase::Won);
        let banner = Banner::from_snapshot(&Snapshot::capture(&state)).unwrap();
        assert_eq!(banner.title, "YOU WIN!");
        assert_eq!(banner.score_line, "Final Score: 30");
        assert_eq!(banner.prompt, RESTART_PROMPT);
    }
}

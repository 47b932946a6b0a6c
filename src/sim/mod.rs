//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod fish;
pub mod snapshot;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{Encounter, can_eat, circles_overlap, player_touches, resolve};
pub use fish::{Facing, Fish, FishColor, Player, SizeClass};
pub use snapshot::{FishView, PlayerView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, LossCause};
pub use steering::{Behavior, patrol_step, steer};
pub use tick::{TickInput, countdown, drain_events, pointer_moved, tick};

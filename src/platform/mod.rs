//! Platform abstraction layer
//!
//! Hosts hand us wall-clock time (a `requestAnimationFrame` timestamp in the
//! browser, a simulated clock in the headless demo). `TickClock` turns that
//! into the two repeating ticks a round runs on.

pub mod timers;

pub use timers::{MAX_CATCH_UP, RepeatingTimer, TickClock, Ticks};

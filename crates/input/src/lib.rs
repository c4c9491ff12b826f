//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and resize events into [`crate::types::GameEvent`]s for
//! the game state machine.

pub mod map;

pub use river_ride_types as types;

pub use map::{handle_event, handle_key_event, playfield_size, should_quit};

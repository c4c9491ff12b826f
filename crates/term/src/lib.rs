//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`core::GameSnapshot`] into a plain framebuffer which is then
//! flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep screen layout testable without a terminal
//! - Only rewrite the rows that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use river_ride_core as core;
pub use river_ride_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_changed_rows, encode_full, TerminalRenderer};

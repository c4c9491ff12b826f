//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the river generator, the scrolling buffer, collision
//! checks and the game state machine. It has **zero dependencies** on the
//! terminal, keyboard or clock, making it:
//!
//! - **Deterministic**: Same seed and events produce identical runs
//! - **Testable**: Every transition can be driven by plain [`GameEvent`]s
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`terrain`]: Terrain grid plus whole-grid and per-row channel generation
//! - [`scroll`]: Row recycling, scroll score and the tick-to-scroll counter
//! - [`collision`]: Classifies the player's cell (safe, land, outside, goal)
//! - [`game_state`]: Title / Playing / GameOver / Win state machine
//! - [`rng`]: Seedable generator owned by a game
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Game Rules
//!
//! - The channel scrolls up one row every `scroll_interval` ticks and each
//!   scroll scores a point
//! - Touching land or leaving the playfield ends the run
//! - With [`GoalPolicy::ReachTop`] reaching row 0 on open water wins
//!
//! # Example
//!
//! ```
//! use river_ride_core::{Game, Rules};
//! use river_ride_types::{GameEvent, GamePhase};
//!
//! let mut game = Game::new(Rules::default(), 12345);
//! game.handle(GameEvent::Resize { width: 40, height: 20 });
//! game.handle(GameEvent::Start);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! for _ in 0..5 {
//!     game.handle(GameEvent::Tick);
//! }
//! assert!(game.score() <= 1);
//! ```

pub mod collision;
pub mod game_state;
pub mod rng;
pub mod scroll;
pub mod snapshot;
pub mod terrain;

pub use river_ride_types as types;

// Re-export commonly used types for convenience
pub use collision::evaluate;
pub use game_state::{Flow, Game, Rules};
pub use rng::{seeded, TerrainRng};
pub use scroll::{ScrollBuffer, ScrollTicker};
pub use snapshot::GameSnapshot;
pub use terrain::{generate_initial, generate_row, spawn_point, Row, TerrainGrid};
pub use types::{GameEvent, GoalPolicy};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond parsing and display
//! helpers, so they can be shared by the simulation core, the terminal view
//! and the input mapping without pulling in any of them.
//!
//! # Terrain Generation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_INITIAL_CHANNEL_WIDTH` | 10 | Smallest channel width drawn for a new grid |
//! | `MAX_INITIAL_CHANNEL_WIDTH` | 20 | Largest channel width drawn for a new grid |
//! | `MIN_CHANNEL_WIDTH` | 8 | Floor applied when a scrolled row narrows |
//! | `FALLBACK_CHANNEL_WIDTH` | 15 | Width used when the reference row has no channel |
//! | `WAVE_PERIOD` | 5.0 | Rows per radian of the sinusoidal centre line |
//! | `WAVE_AMPLITUDE` | 10.0 | Maximum centre offset from the middle column |
//! | `BRANCH_ODDS` | 20 | A branch is carved on one row in twenty |
//!
//! # Timing
//!
//! - `DEFAULT_TICK_MS`: 200ms between timer ticks
//! - `DEFAULT_SCROLL_INTERVAL`: 5 ticks per scroll (one row per second)
//!
//! # Examples
//!
//! ```
//! use river_ride_types::{Cell, GameEvent, GamePhase, GoalPolicy};
//!
//! assert!(Cell::Channel.is_passable());
//! assert!(!Cell::Land.is_passable());
//!
//! let event = GameEvent::from_str("moveLeft").unwrap();
//! assert_eq!(event, GameEvent::MoveLeft);
//!
//! assert_eq!(GoalPolicy::from_str("top"), Some(GoalPolicy::ReachTop));
//! assert_eq!(GamePhase::default(), GamePhase::Title);
//! ```

use serde::Serialize;

/// Default timer period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 200;

/// Timer ticks per scroll when no other interval is configured.
pub const DEFAULT_SCROLL_INTERVAL: u32 = 5;

/// Terminal rows reserved below the playfield for the status line.
pub const STATUS_ROWS: u16 = 2;

/// Smallest channel width drawn for a freshly generated grid.
pub const MIN_INITIAL_CHANNEL_WIDTH: i32 = 10;

/// Largest channel width drawn for a freshly generated grid.
pub const MAX_INITIAL_CHANNEL_WIDTH: i32 = 20;

/// A scrolled row never narrows below this width.
pub const MIN_CHANNEL_WIDTH: i32 = 8;

/// Channel width used when the reference row holds no channel cells.
pub const FALLBACK_CHANNEL_WIDTH: i32 = 15;

/// Rows per radian of the initial channel's centre line.
pub const WAVE_PERIOD: f64 = 5.0;

/// Maximum horizontal offset of the initial centre line.
pub const WAVE_AMPLITUDE: f64 = 10.0;

/// One row in `BRANCH_ODDS` gets a branch.
pub const BRANCH_ODDS: u32 = 20;

/// Branch length range for the initial grid (inclusive).
pub const INITIAL_BRANCH_LEN: (i32, i32) = (5, 14);

/// Branch length range for scrolled rows (inclusive).
pub const ROW_BRANCH_LEN: (i32, i32) = (2, 6);

/// Scrolled rows keep their width nine times in ten.
pub const WIDTH_CHANGE_ODDS: u32 = 10;

/// Distance from the bottom row at which the player spawns.
pub const SPAWN_ROWS_FROM_BOTTOM: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_constants_are_consistent() {
        assert!(MIN_CHANNEL_WIDTH < MIN_INITIAL_CHANNEL_WIDTH);
        assert!(MIN_INITIAL_CHANNEL_WIDTH <= MAX_INITIAL_CHANNEL_WIDTH);
        assert!(INITIAL_BRANCH_LEN.0 <= INITIAL_BRANCH_LEN.1);
        assert!(ROW_BRANCH_LEN.0 <= ROW_BRANCH_LEN.1);
        assert!(DEFAULT_SCROLL_INTERVAL > 0);
    }

    #[test]
    fn event_names_round_trip_through_parser() {
        for event in [
            GameEvent::Quit,
            GameEvent::Start,
            GameEvent::Restart,
            GameEvent::MoveUp,
            GameEvent::MoveDown,
            GameEvent::MoveLeft,
            GameEvent::MoveRight,
            GameEvent::Tick,
        ] {
            assert_eq!(GameEvent::from_str(event.as_str()), Some(event));
        }
        assert_eq!(GameEvent::from_str("resize"), None);
    }
}

/// A single terrain cell.
///
/// - **Land**: impassable bank
/// - **Channel**: open water the player may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Land,
    Channel,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        matches!(self, Cell::Channel)
    }
}

/// Player position in playfield coordinates.
///
/// Signed so that a position pushed past an edge can be represented and
/// classified instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step in `dir`.
    pub fn stepped(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction. Row 0 is the top of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Top-level game state.
///
/// The cycle goes: Title → Playing → (GameOver | Win) → Playing → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Title,
    Playing,
    GameOver,
    Win,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Title => "title",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
            GamePhase::Win => "win",
        }
    }
}

/// Whether reaching the top row ends the run.
///
/// - **Endless**: scroll until the player hits land
/// - **ReachTop**: reaching row 0 on open water wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    #[default]
    Endless,
    ReachTop,
}

impl GoalPolicy {
    /// Parse a goal policy (case-insensitive).
    ///
    /// ```
    /// use river_ride_types::GoalPolicy;
    ///
    /// assert_eq!(GoalPolicy::from_str("endless"), Some(GoalPolicy::Endless));
    /// assert_eq!(GoalPolicy::from_str("none"), Some(GoalPolicy::Endless));
    /// assert_eq!(GoalPolicy::from_str("Top"), Some(GoalPolicy::ReachTop));
    /// assert_eq!(GoalPolicy::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "endless" | "none" => Some(GoalPolicy::Endless),
            "top" | "reach_top" | "reachtop" => Some(GoalPolicy::ReachTop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPolicy::Endless => "endless",
            GoalPolicy::ReachTop => "reach_top",
        }
    }
}

/// Verdict of a collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Safe,
    OutOfBounds,
    OnLand,
    GoalReached,
}

impl Outcome {
    /// Phase this outcome moves a running game into, if any.
    pub fn next_phase(self) -> Option<GamePhase> {
        match self {
            Outcome::Safe => None,
            Outcome::OutOfBounds | Outcome::OnLand => Some(GamePhase::GameOver),
            Outcome::GoalReached => Some(GamePhase::Win),
        }
    }
}

/// Events consumed by the game state machine.
///
/// Key presses, timer ticks and terminal resizes all arrive through this one
/// type and are applied strictly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Leave the game
    Quit,
    /// Start a run from the title screen
    Start,
    /// Start a new run after GameOver or Win
    Restart,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Playfield size changed (status rows already excluded)
    Resize { width: u16, height: u16 },
    /// One period of the external timer elapsed
    Tick,
}

impl GameEvent {
    /// Parse a parameterless event from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use river_ride_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::from_str("moveUp"), Some(GameEvent::MoveUp));
    /// assert_eq!(GameEvent::from_str("TICK"), Some(GameEvent::Tick));
    /// assert_eq!(GameEvent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(GameEvent::Quit),
            "start" => Some(GameEvent::Start),
            "restart" => Some(GameEvent::Restart),
            "moveup" => Some(GameEvent::MoveUp),
            "movedown" => Some(GameEvent::MoveDown),
            "moveleft" => Some(GameEvent::MoveLeft),
            "moveright" => Some(GameEvent::MoveRight),
            "tick" => Some(GameEvent::Tick),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Quit => "quit",
            GameEvent::Start => "start",
            GameEvent::Restart => "restart",
            GameEvent::MoveUp => "moveUp",
            GameEvent::MoveDown => "moveDown",
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::Resize { .. } => "resize",
            GameEvent::Tick => "tick",
        }
    }

    /// Movement direction carried by this event, if it is a move.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameEvent::MoveUp => Some(Direction::Up),
            GameEvent::MoveDown => Some(Direction::Down),
            GameEvent::MoveLeft => Some(Direction::Left),
            GameEvent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

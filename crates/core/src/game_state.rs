//! Game state module - the event-driven state machine
//!
//! This module ties together terrain generation, scrolling and collision
//! checks. Events are applied one at a time through [`Game::handle`]; each
//! event either leaves the game untouched or moves it to a new consistent
//! state, so there is never a half-applied transition to unwind.

use serde::Serialize;

use crate::collision::evaluate;
use crate::rng::{seeded, TerrainRng};
use crate::scroll::{ScrollBuffer, ScrollTicker};
use crate::snapshot::GameSnapshot;
use crate::terrain::{generate_initial, spawn_point, TerrainGrid};
use crate::types::*;

/// Tunable rules of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rules {
    /// Whether reaching row 0 wins.
    pub goal: GoalPolicy,
    /// Timer ticks per scroll.
    pub scroll_interval: u32,
    /// Award a point for every step upstream.
    pub score_on_ascent: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            goal: GoalPolicy::Endless,
            scroll_interval: DEFAULT_SCROLL_INTERVAL,
            score_on_ascent: false,
        }
    }
}

/// Whether the driver should keep feeding events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything that belongs to one run. Replaced wholesale on start, restart
/// and resize.
#[derive(Debug, Clone)]
struct World {
    player: Player,
    buffer: ScrollBuffer,
    ticker: ScrollTicker,
}

impl World {
    fn empty(interval: u32) -> Self {
        Self {
            player: Player::default(),
            buffer: ScrollBuffer::new(TerrainGrid::new(0, 0)),
            ticker: ScrollTicker::new(interval),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    phase: GamePhase,
    seed: u64,
    rng: TerrainRng,
    /// Playfield size in cells (status rows excluded).
    width: usize,
    height: usize,
    world: World,
    /// Monotonic run id (increments on every start or restart).
    run_id: u32,
    last_outcome: Option<Outcome>,
}

impl Game {
    /// Create a game on the title screen with an empty playfield.
    pub fn new(rules: Rules, seed: u64) -> Self {
        Self {
            rules,
            phase: GamePhase::Title,
            seed,
            rng: seeded(seed),
            width: 0,
            height: 0,
            world: World::empty(rules.scroll_interval),
            run_id: 0,
            last_outcome: None,
        }
    }

    /// Resume play on a prepared terrain.
    ///
    /// The playfield takes the terrain's size and the game is Playing with a
    /// zero score. Used for replays and scripted scenarios.
    pub fn from_parts(rules: Rules, seed: u64, terrain: TerrainGrid, player: Player) -> Self {
        let mut game = Self::new(rules, seed);
        game.width = terrain.width();
        game.height = terrain.height();
        game.world = World {
            player,
            buffer: ScrollBuffer::new(terrain),
            ticker: ScrollTicker::new(rules.scroll_interval),
        };
        game.phase = GamePhase::Playing;
        game.run_id = 1;
        game
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn playfield(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn player(&self) -> Player {
        self.world.player
    }

    pub fn terrain(&self) -> &TerrainGrid {
        self.world.buffer.terrain()
    }

    pub fn score(&self) -> u32 {
        self.world.buffer.score()
    }

    pub fn scroll_ticks(&self) -> u32 {
        self.world.ticker.count()
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    /// Verdict of the most recent collision check.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            phase: self.phase,
            goal: self.rules.goal,
            run_id: self.run_id,
            terrain: self.terrain(),
            player: self.world.player,
            score: self.score(),
            scroll_ticks: self.scroll_ticks(),
            last_outcome: self.last_outcome,
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: GameEvent) -> Flow {
        match event {
            GameEvent::Quit => return Flow::Quit,
            GameEvent::Start | GameEvent::Restart => {
                self.start();
            }
            GameEvent::MoveUp
            | GameEvent::MoveDown
            | GameEvent::MoveLeft
            | GameEvent::MoveRight => {
                if let Some(dir) = event.direction() {
                    self.move_player(dir);
                }
            }
            GameEvent::Resize { width, height } => self.resize(width, height),
            GameEvent::Tick => {
                self.tick();
            }
        }
        Flow::Continue
    }

    /// Start a new run. Ignored while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }

        let terrain = generate_initial(self.width, self.height, &mut self.rng);
        let player = spawn_point(&terrain).unwrap_or_default();
        self.world = World {
            player,
            buffer: ScrollBuffer::new(terrain),
            ticker: ScrollTicker::new(self.rules.scroll_interval),
        };
        self.phase = GamePhase::Playing;
        self.run_id = self.run_id.wrapping_add(1);
        self.last_outcome = None;

        log::info!(
            "run {} started on {}x{} playfield ({} goal)",
            self.run_id,
            self.width,
            self.height,
            self.rules.goal.as_str()
        );
        true
    }

    /// Move the player one cell. Moves that would leave the playfield are
    /// refused. Returns true if the player moved.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        let target = self.world.player.stepped(dir);
        if !self.in_playfield(target) {
            return false;
        }

        self.world.player = target;
        if dir == Direction::Up && self.rules.score_on_ascent {
            self.world.buffer.add_score(1);
        }
        self.check_collision();
        true
    }

    /// Advance the scroll ticker, scrolling when it comes due. Returns true
    /// if the terrain scrolled.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        if !self.world.ticker.advance() {
            return false;
        }
        if !self.world.buffer.scroll(&mut self.rng) {
            return false;
        }

        log::debug!("scrolled, score {}", self.score());
        // The player stays put while the terrain moves under them.
        self.check_collision();
        true
    }

    /// Record a new playfield size. A run in progress gets fresh terrain for
    /// the new size; its score and ticker carry over.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width as usize;
        self.height = height as usize;

        if self.phase != GamePhase::Playing {
            return;
        }

        let terrain = generate_initial(self.width, self.height, &mut self.rng);
        self.world.player = spawn_point(&terrain).unwrap_or_default();
        self.world.buffer.replace_terrain(terrain);

        log::info!(
            "run {} regenerated for {}x{} playfield",
            self.run_id,
            self.width,
            self.height
        );
    }

    fn in_playfield(&self, p: Player) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn check_collision(&mut self) -> Outcome {
        let outcome = evaluate(self.world.player, self.terrain(), self.rules.goal);
        self.last_outcome = Some(outcome);

        if let Some(next) = outcome.next_phase() {
            self.phase = next;
            log::info!(
                "run {} ended: {:?} at ({}, {}) with score {}",
                self.run_id,
                outcome,
                self.world.player.x,
                self.world.player.y,
                self.score()
            );
        }
        outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default(), 1)
    }
}

//! Terminal river ride runner (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer that only
//! rewrites changed rows.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use river_ride::config::RunConfig;
use river_ride::core::{Flow, Game};
use river_ride::input::{handle_event, playfield_size};
use river_ride::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use river_ride::types::GameEvent;

fn main() -> Result<()> {
    // Before the config: parsing logs warnings about ignored values.
    init_logging(RunConfig::log_path_from_env().as_deref())?;
    let config = RunConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Pipe log records to `RIVER_LOG_PATH`. The terminal is in raw mode on the
/// alternate screen, so stderr is not an option.
fn init_logging(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}, tick {}ms, rules {:?}", config.tick_ms, config.rules());

    let mut game = Game::new(config.rules(), seed);
    let (mut cols, mut rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let (width, height) = playfield_size(cols, rows);
    game.handle(GameEvent::Resize { width, height });

    let view = GameView::default();
    let mut fb = FrameBuffer::new(cols, rows);

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        view.render_into(&game.snapshot(), Viewport::new(cols, rows), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(c, r) = ev {
                cols = c;
                rows = r;
                term.invalidate();
            }
            if let Some(game_event) = handle_event(&ev) {
                if game.handle(game_event) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            game.handle(GameEvent::Tick);
            last_tick = Instant::now();
        }
    }
}

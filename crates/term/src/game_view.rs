//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, GamePhase, GoalPolicy, Outcome, STATUS_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Rows available to the playfield.
    pub fn playfield_height(&self) -> u16 {
        self.height.saturating_sub(STATUS_ROWS)
    }
}

/// Draws the title, playing, game-over and win screens.
pub struct GameView {
    land: Style,
    channel: Style,
    player: Style,
    text: Style,
    banner: Style,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            land: Style::new(Rgb::new(120, 160, 90), Rgb::new(40, 50, 30)),
            channel: Style::new(Rgb::new(200, 220, 255), Rgb::new(20, 60, 130)),
            player: Style::new(Rgb::new(255, 230, 80), Rgb::new(20, 60, 130)).bold(),
            text: Style::default(),
            banner: Style::new(Rgb::new(0xFA, 0xFA, 0xFA), Rgb::new(0x7D, 0x56, 0xF4)).bold(),
        }
    }
}

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(' ', self.text);

        match snap.phase {
            GamePhase::Title => self.draw_title(fb, snap.goal),
            GamePhase::Playing => self.draw_playing(fb, snap, viewport),
            GamePhase::GameOver => self.draw_result(fb, snap, false),
            GamePhase::Win => self.draw_result(fb, snap, true),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, goal: GoalPolicy) {
        let title = match goal {
            GoalPolicy::Endless => "  Endless River Ride  ",
            GoalPolicy::ReachTop => "  River Race  ",
        };
        let y = (fb.height() / 2).saturating_sub(2);
        fb.put_str_centered(y, title, self.banner);
        fb.put_str_centered(y + 2, "Press 's' to start the game", self.text);

        if fb.height() > 0 {
            fb.put_str(0, fb.height() - 1, "Press q to quit", self.text);
        }
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let rows = viewport.playfield_height();

        for (y, row) in snap.terrain.rows().take(rows as usize).enumerate() {
            for (x, cell) in row.iter().take(viewport.width as usize).enumerate() {
                let (ch, style) = match cell {
                    Cell::Land => ('.', self.land),
                    Cell::Channel => (' ', self.channel),
                };
                fb.put(x as u16, y as u16, ch, style);
            }
        }

        let p = snap.player;
        if p.x >= 0 && p.y >= 0 && (p.y as u16) < rows {
            fb.put(p.x as u16, p.y as u16, 'P', self.player);
        }

        if viewport.height > 0 {
            let hint = match snap.goal {
                GoalPolicy::Endless => "Navigate through the river!",
                GoalPolicy::ReachTop => "Reach the top of the river!",
            };
            let status = format!(
                "Score: {} | {} Use arrow keys to move. Avoid land (.) | Press q to quit",
                snap.score, hint
            );
            fb.put_str(0, viewport.height - 1, &status, self.text);
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, won: bool) {
        let (headline, headline_style) = if won {
            (
                "  YOU MADE IT  ",
                Style::new(Rgb::new(0, 0, 0), Rgb::new(80, 220, 120)).bold(),
            )
        } else {
            (
                "  GAME OVER  ",
                Style::new(Rgb::new(0xFF, 0, 0), Rgb::new(0, 0, 0)).bold(),
            )
        };
        let reason = match snap.last_outcome {
            Some(Outcome::OnLand) => "You ran aground.",
            Some(Outcome::OutOfBounds) => "You drifted out of the river.",
            Some(Outcome::GoalReached) => "You reached the top of the river.",
            Some(Outcome::Safe) | None => "",
        };

        let y = (fb.height() / 2).saturating_sub(3);
        fb.put_str_centered(y, headline, headline_style);
        fb.put_str_centered(y + 1, reason, self.text);
        fb.put_str_centered(
            y + 2,
            &format!("Final Score: {}", snap.score),
            Style::new(Rgb::new(0xFF, 0xFF, 0xFF), Rgb::new(0, 0, 0)).bold(),
        );
        fb.put_str_centered(y + 4, "Press 'r' to restart", self.text);
        fb.put_str_centered(y + 6, "Press q to quit", self.text);
    }
}

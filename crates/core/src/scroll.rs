//! Scroll module - row recycling and the score it earns
//!
//! Every scroll drops the top row, moves the rest up by one and generates a
//! fresh bottom row from the new top row. The [`ScrollTicker`] decides how
//! many timer ticks pass between scrolls.

use rand::Rng;

use crate::terrain::{generate_row, TerrainGrid};

/// Owns the live terrain and the score accumulated by scrolling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollBuffer {
    terrain: TerrainGrid,
    score: u32,
}

impl ScrollBuffer {
    pub fn new(terrain: TerrainGrid) -> Self {
        Self { terrain, score: 0 }
    }

    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Swap in a regenerated grid, keeping the score.
    pub fn replace_terrain(&mut self, terrain: TerrainGrid) {
        self.terrain = terrain;
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Scroll the terrain up by one row.
    ///
    /// Returns false (and changes nothing) when the grid is empty or has at
    /// most one row.
    pub fn scroll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.terrain.is_empty() || self.terrain.height() <= 1 {
            return false;
        }

        self.terrain.pop_top();
        let width = self.terrain.width();
        let row = match self.terrain.top_row() {
            Some(top) => generate_row(width, top, rng),
            None => return false,
        };
        self.terrain.push_bottom(row);

        self.score = self.score.saturating_add(1);
        true
    }
}

/// Counts timer ticks between scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicker {
    count: u32,
    interval: u32,
}

impl ScrollTicker {
    /// An interval of zero is treated as one (scroll on every tick).
    pub fn new(interval: u32) -> Self {
        Self {
            count: 0,
            interval: interval.max(1),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Count one tick. Returns true when a scroll is due; the counter is
    /// then back at zero.
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

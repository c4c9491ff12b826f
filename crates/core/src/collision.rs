//! Collision module - classify the player's position against the terrain

use crate::terrain::TerrainGrid;
use crate::types::{Cell, GoalPolicy, Outcome, Player};

/// Classify `player` against `grid`.
///
/// Bounds are checked before any cell lookup. Land beats the goal row, so a
/// player on land in row 0 still loses.
pub fn evaluate(player: Player, grid: &TerrainGrid, goal: GoalPolicy) -> Outcome {
    let Some(cell) = grid.get(player.x, player.y) else {
        return Outcome::OutOfBounds;
    };

    match (cell, goal) {
        (Cell::Land, _) => Outcome::OnLand,
        (Cell::Channel, GoalPolicy::ReachTop) if player.y == 0 => Outcome::GoalReached,
        (Cell::Channel, _) => Outcome::Safe,
    }
}

use serde::Serialize;

use crate::terrain::TerrainGrid;
use crate::types::{GamePhase, GoalPolicy, Outcome, Player};

/// Read-only view of a game handed to renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot<'a> {
    pub phase: GamePhase,
    pub goal: GoalPolicy,
    pub run_id: u32,
    pub terrain: &'a TerrainGrid,
    pub player: Player,
    pub score: u32,
    pub scroll_ticks: u32,
    pub last_outcome: Option<Outcome>,
}

impl GameSnapshot<'_> {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

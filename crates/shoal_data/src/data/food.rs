use super::entity::{Position, Velocity};
use serde::{Deserialize, Serialize};

/// A drifting food pellet or carcass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub velocity: Velocity,
    /// Simulation timestamp (ms) when the item appeared.
    pub created_at: u64,
    pub nutrition: f64,
    /// Produced by a kill or a starved carcass rather than scattered pellets.
    pub sourced_from_kill: bool,
}

impl Food {
    pub fn new(position: Position, velocity: Velocity, created_at: u64, nutrition: f64) -> Self {
        Self {
            position,
            velocity,
            created_at,
            nutrition,
            sourced_from_kill: false,
        }
    }

    #[must_use]
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }
}

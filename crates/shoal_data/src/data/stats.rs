use super::species::SPECIES_COUNT;
use serde::{Deserialize, Serialize};

/// Aggregate population statistics.
///
/// The counters are bumped at the event sites; the remaining fields are
/// derived from the live collections once per tick.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Stats {
    /// Agents created by seeding, user spawns and reproduction.
    pub total_born: u64,
    /// Agents removed by predation or starvation.
    pub total_dead: u64,
    pub predation_count: u64,
    pub starvation_count: u64,
    /// Number of living agents.
    pub population: usize,
    /// Number of food items currently in the water.
    pub food_count: usize,
    /// Mean size multiplier of living agents, 0.0 when empty.
    pub avg_size: f64,
    pub starving_count: usize,
    /// Living agents per species, indexed by `SpeciesId`.
    pub species_counts: [usize; SPECIES_COUNT],
}

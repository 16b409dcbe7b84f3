//! Population statistics: derived counts and lifetime event counters.

use shoal_data::{Agent, Stats};

/// Recomputes the derived population fields. Event counters are left alone.
pub fn update_population_stats(stats: &mut Stats, agents: &[Agent], food_count: usize) {
    stats.population = agents.len();
    stats.food_count = food_count;
    stats.species_counts = Default::default();
    stats.starving_count = 0;

    if agents.is_empty() {
        stats.avg_size = 0.0;
        return;
    }

    let mut total_size = 0.0;
    for a in agents {
        total_size += a.metabolism.size;
        if a.metabolism.is_starving {
            stats.starving_count += 1;
        }
        if let Some(count) = stats.species_counts.get_mut(a.species.index()) {
            *count += 1;
        }
    }
    stats.avg_size = total_size / agents.len() as f64;
}

pub fn record_birth(stats: &mut Stats) {
    stats.total_born += 1;
}

pub fn record_predation(stats: &mut Stats) {
    stats.total_dead += 1;
    stats.predation_count += 1;
}

pub fn record_starvation(stats: &mut Stats) {
    stats.total_dead += 1;
    stats.starvation_count += 1;
}

//! Eating, predation, starvation and reproduction.

use super::Ecosystem;
use crate::food::FoodKind;
use crate::lifecycle::{self, Vitality};
use crate::species;
use crate::stats;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

impl Ecosystem {
    /// Eats the newest food item within reach. Returns whether it ate.
    pub fn try_feed_on_food(&mut self, id: Uuid) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let agent = &self.agents[idx];
        let reach = self.config.metabolism.eat_distance * agent.metabolism.size;
        let Some(food) = self.food.remove_nearest(&agent.position, reach) else {
            return false;
        };

        let agent = &mut self.agents[idx];
        lifecycle::mark_fed(agent, self.now);
        lifecycle::grow(
            agent,
            food.nutrition * self.config.metabolism.growth_rate,
            &self.config.metabolism,
        );
        debug!(agent = %id, size = agent.metabolism.size, kill = food.sourced_from_kill, "Ate food");

        self.maybe_reproduce_after_meal(idx);
        true
    }

    /// Hunts one smaller agent from an edible trophic level. Only
    /// carnivores and apex predators hunt.
    pub fn try_predate(&mut self, id: Uuid) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let predator = &self.agents[idx];
        if !species::species(predator.species).diet.is_predatory() {
            return false;
        }

        let reach = self.config.metabolism.eat_distance * predator.metabolism.size;
        let prey_idx = self
            .agents
            .iter()
            .enumerate()
            .rev()
            .find(|(i, prey)| {
                *i != idx
                    && species::can_prey(predator.species, prey.species)
                    && prey.metabolism.size < predator.metabolism.size
                    && predator.distance_to(prey) < reach
            })
            .map(|(i, _)| i);
        let Some(prey_idx) = prey_idx else {
            return false;
        };

        let prey = self.agents.remove(prey_idx);
        let idx = if prey_idx < idx { idx - 1 } else { idx };
        stats::record_predation(&mut self.stats);

        let predator = &mut self.agents[idx];
        lifecycle::grow(
            predator,
            prey.metabolism.size * self.config.metabolism.predation_growth_factor,
            &self.config.metabolism,
        );
        predator.metabolism.last_fed_at = self.now;
        predator.metabolism.is_starving = false;
        debug!(predator = %id, prey = %prey.id(), size = predator.metabolism.size, "Predation");

        self.food.spawn(
            &mut self.rng,
            Some(prey.position),
            FoodKind::Carcass,
            self.now,
            &self.bounds,
        );
        self.maybe_reproduce_after_meal(idx);
        true
    }

    /// Runs one metabolism step for `id`. Returns `false` when the agent is
    /// gone, either already or because it starved to death just now.
    pub fn update_metabolism(&mut self, id: Uuid, delta_ms: f64) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        match lifecycle::update_metabolism(&mut self.agents[idx], self.now, delta_ms, &self.config) {
            Vitality::Alive => true,
            Vitality::Starved => {
                let dead = self.agents.remove(idx);
                stats::record_starvation(&mut self.stats);
                debug!(agent = %id, size = dead.metabolism.size, "Starved");
                if dead.metabolism.size > self.config.metabolism.carcass_min_size {
                    self.food.spawn(
                        &mut self.rng,
                        Some(dead.position),
                        FoodKind::Carcass,
                        self.now,
                        &self.bounds,
                    );
                }
                false
            }
        }
    }

    /// Spawns a litter around `id` if it is eligible. Returns the number of
    /// offspring.
    pub fn reproduce(&mut self, id: Uuid) -> usize {
        let Some(idx) = self.index_of(id) else {
            return 0;
        };
        let now = self.now;
        let parent = &mut self.agents[idx];
        lifecycle::refresh_reproduction(parent, now, &self.config.reproduction);
        if !parent.reproduction.can_reproduce {
            return 0;
        }
        lifecycle::start_cooldown(parent, now, &self.config.reproduction);

        let species = parent.species;
        let spots = lifecycle::offspring_positions(parent, &self.config.reproduction);
        let litter = spots.len();
        for position in spots {
            let mut child = lifecycle::create_agent_with_rng(
                &mut self.rng,
                species,
                position,
                now,
                &self.config.metabolism,
            );
            child.metabolism.size = self.config.reproduction.offspring_size;
            child.identity.parent_id = Some(id);
            self.insert_agent(child);
        }
        debug!(parent = %id, litter, "Reproduced");
        litter
    }

    /// Post-meal breeding roll. The draw only happens for agents big enough
    /// to breed.
    fn maybe_reproduce_after_meal(&mut self, idx: usize) {
        let agent = &self.agents[idx];
        if agent.metabolism.size < self.config.reproduction.reproduction_size {
            return;
        }
        let id = agent.id();
        if self.rng.gen::<f64>() < self.config.reproduction.reproduction_chance {
            self.reproduce(id);
        }
    }
}

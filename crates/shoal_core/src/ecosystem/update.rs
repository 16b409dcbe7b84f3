//! The per-tick update loop.
//!
//! Each tick visits agents newest first, then runs the food feeder, drifts
//! and expires food, and tops the population up when it falls too low.

use super::Ecosystem;
use crate::flocking;
use crate::food::FoodKind;
use crate::lifecycle;
use crate::snapshot::Frame;
use rand::Rng;
use shoal_data::Diet;
use tracing::{debug, info};
use uuid::Uuid;

impl Ecosystem {
    /// Advances the simulation to `now`, `delta_ms` after the previous tick.
    ///
    /// A paused ecosystem returns its current frame and changes nothing.
    pub fn tick(&mut self, now: u64, delta_ms: f64) -> Frame {
        if !self.running {
            return self.frame();
        }
        self.now = now;

        // Agents removed mid-pass are skipped; agents born mid-pass wait for
        // the next tick.
        let ids: Vec<Uuid> = self.agents.iter().rev().map(|a| a.id()).collect();
        for id in ids {
            self.update_agent(id, delta_ms);
        }

        self.run_food_spawner();
        self.food
            .drift_and_expire(now, &self.bounds, self.config.frame_scale(delta_ms));
        self.enforce_population_floor();
        self.refresh_stats();
        self.frame()
    }

    fn update_agent(&mut self, id: Uuid, delta_ms: f64) {
        let Some(agent) = self.agent(id) else {
            return;
        };
        let herbivore = crate::species::species(agent.species).diet == Diet::Herbivore;

        if !self.try_feed_on_food(id) && !herbivore {
            self.try_predate(id);
        }
        if !self.update_metabolism(id, delta_ms) {
            return;
        }

        let Some(idx) = self.index_of(id) else {
            return;
        };
        let force = flocking::steer(
            &self.agents[idx],
            &self.agents,
            &self.food,
            &self.bounds,
            &self.config.flocking,
        )
        .combined(&self.config.flocking);
        lifecycle::integrate(&mut self.agents[idx], force, delta_ms, &self.config);

        if self.agents[idx].reproduction.can_reproduce
            && self.rng.gen::<f64>() < self.config.reproduction.natural_reproduction_chance
        {
            self.reproduce(id);
        }
    }

    /// Drops a pellet every `spawn_interval` ms. The first tick only starts
    /// the timer.
    fn run_food_spawner(&mut self) {
        match self.last_food_spawn_at {
            None => self.last_food_spawn_at = Some(self.now),
            Some(last) if self.now.saturating_sub(last) >= self.config.food.spawn_interval => {
                self.last_food_spawn_at = Some(self.now);
                if self
                    .food
                    .spawn(&mut self.rng, None, FoodKind::Pellet, self.now, &self.bounds)
                    .is_none()
                {
                    debug!(food = self.food.len(), "Feeder skipped, water is full");
                }
            }
            Some(_) => {}
        }
    }

    fn enforce_population_floor(&mut self) {
        let world = &self.config.world;
        if self.agents.len() < world.min_population {
            let refill = world.population_refill;
            info!(
                population = self.agents.len(),
                refill, "Population below floor, restocking"
            );
            self.seed_population(refill);
        }
    }
}

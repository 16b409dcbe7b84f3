//! User-facing commands, applied between ticks.

use super::Ecosystem;
use crate::error::{Result, SimError};
use crate::food::FoodKind;
use crate::lifecycle;
use crate::species;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shoal_data::{Bounds, Position, Stats};
use std::f64::consts::TAU;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A command from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SpawnAgent { position: Option<Position> },
    SpawnAgents { count: usize },
    SpawnFood { position: Option<Position>, is_fish_food: bool },
    SpawnFoodBurst { count: usize, positions: Vec<Position> },
    FeedAt { x: f64, y: f64 },
    ClearFood,
    Reset,
    SetRunning { running: bool },
    ToggleRunning,
    SetViewport { bounds: Bounds },
}

impl Ecosystem {
    /// Dispatches a command. Only a viewport change can fail.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SpawnAgent { position } => {
                self.spawn_agent(position);
            }
            Command::SpawnAgents { count } => {
                self.spawn_agents(count);
            }
            Command::SpawnFood {
                position,
                is_fish_food,
            } => {
                self.spawn_food(position, is_fish_food);
            }
            Command::SpawnFoodBurst { count, positions } => {
                self.spawn_food_burst(count, &positions);
            }
            Command::FeedAt { x, y } => {
                self.feed_at(x, y);
            }
            Command::ClearFood => self.clear_food(),
            Command::Reset => self.reset(),
            Command::SetRunning { running } => self.set_running(running),
            Command::ToggleRunning => {
                self.toggle_running();
            }
            Command::SetViewport { bounds } => self.set_viewport(bounds)?,
        }
        Ok(())
    }

    /// Adds one agent of a random species, at `position` or anywhere.
    pub fn spawn_agent(&mut self, position: Option<Position>) -> Uuid {
        let species = species::pick_random_species(&mut self.rng);
        let position = match position {
            Some(p) => p,
            None => self.random_position(),
        };
        let agent = lifecycle::create_agent_with_rng(
            &mut self.rng,
            species,
            position,
            self.now,
            &self.config.metabolism,
        );
        let id = self.insert_agent(agent);
        self.refresh_stats();
        id
    }

    pub fn spawn_agents(&mut self, count: usize) -> Vec<Uuid> {
        (0..count).map(|_| self.spawn_agent(None)).collect()
    }

    /// Drops one food item. `is_fish_food` makes it a nutritious carcass.
    /// Returns `false` when the water already holds `max_food` items.
    pub fn spawn_food(&mut self, position: Option<Position>, is_fish_food: bool) -> bool {
        let kind = if is_fish_food {
            FoodKind::Carcass
        } else {
            FoodKind::Pellet
        };
        let spawned = self
            .food
            .spawn(&mut self.rng, position, kind, self.now, &self.bounds)
            .is_some();
        if !spawned {
            debug!(food = self.food.len(), "Food refused, water is full");
        }
        self.refresh_stats();
        spawned
    }

    /// Drops `count` pellets; the i-th lands at `positions[i]` when given,
    /// anywhere otherwise. Returns how many were placed.
    pub fn spawn_food_burst(&mut self, count: usize, positions: &[Position]) -> usize {
        (0..count)
            .filter(|&i| self.spawn_food(positions.get(i).copied(), false))
            .count()
    }

    /// Scatters a handful of pellets around a click. Ignored while paused.
    pub fn feed_at(&mut self, x: f64, y: f64) -> usize {
        if !self.running {
            warn!(x, y, "Feeding ignored while paused");
            return 0;
        }
        let radius = self.config.food.click_scatter_radius;
        let positions: Vec<Position> = (0..self.config.food.click_count)
            .map(|_| {
                let angle = self.rng.gen::<f64>() * TAU;
                let distance = self.rng.gen::<f64>() * radius;
                Position::new(x + angle.cos() * distance, y + angle.sin() * distance)
            })
            .collect();
        self.spawn_food_burst(positions.len(), &positions)
    }

    pub fn clear_food(&mut self) {
        self.food.clear();
        self.refresh_stats();
    }

    /// Empties the water, zeroes the counters and restocks.
    pub fn reset(&mut self) {
        self.agents.clear();
        self.food.clear();
        self.stats = Stats::default();
        self.last_food_spawn_at = None;
        self.seed_population(self.config.world.initial_population);
        self.running = true;
        self.refresh_stats();
        info!(population = self.agents.len(), "Ecosystem reset");
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!(running, "Simulation state changed");
        }
        self.running = running;
    }

    /// Flips pause state and returns the new one.
    pub fn toggle_running(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    /// Resizes the water and pulls every agent back inside it.
    pub fn set_viewport(&mut self, bounds: Bounds) -> Result<()> {
        if !bounds.is_valid() {
            warn!(width = bounds.width, height = bounds.height, "Rejected viewport");
            return Err(SimError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        self.bounds = bounds;
        for agent in &mut self.agents {
            agent.position = bounds.clamp(agent.position);
        }
        debug!(width = bounds.width, height = bounds.height, "Viewport resized");
        Ok(())
    }
}

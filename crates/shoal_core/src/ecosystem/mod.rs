//! The simulation controller: owns the population, the food, the stats and
//! the random source, and advances them one tick at a time.

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::food::FoodStore;
use crate::lifecycle;
use crate::snapshot::Frame;
use crate::species;
use crate::stats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shoal_data::{Agent, Bounds, Position, Stats};
use uuid::Uuid;

pub mod commands;
pub mod feeding;
pub mod update;

pub use commands::Command;

pub struct Ecosystem {
    config: SimConfig,
    bounds: Bounds,
    agents: Vec<Agent>,
    food: FoodStore,
    stats: Stats,
    running: bool,
    rng: ChaCha8Rng,
    /// Timestamp of the tick in progress, or of the last one.
    now: u64,
    last_food_spawn_at: Option<u64>,
}

impl Ecosystem {
    /// Builds a running ecosystem seeded with `initial_population` agents.
    ///
    /// Draws from `config.world.seed` when set, from OS entropy otherwise.
    pub fn new(config: SimConfig, bounds: Bounds) -> Result<Self> {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, bounds, rng)
    }

    pub fn with_rng(config: SimConfig, bounds: Bounds, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        if !bounds.is_valid() {
            return Err(SimError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let mut eco = Self {
            food: FoodStore::new(config.food.clone()),
            agents: Vec::with_capacity(config.world.initial_population * 2),
            config,
            bounds,
            stats: Stats::default(),
            running: true,
            rng,
            now: 0,
            last_food_spawn_at: None,
        };
        eco.seed_population(eco.config.world.initial_population);
        eco.refresh_stats();
        Ok(eco)
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn food(&self) -> &FoodStore {
        &self.food
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Moves the controller clock without ticking. Commands issued
    /// afterwards are stamped with `now`.
    pub fn set_now(&mut self, now: u64) {
        self.now = now;
    }

    #[must_use]
    pub fn agent(&self, id: Uuid) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn agent_mut(&mut self, id: Uuid) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    pub fn food_mut(&mut self) -> &mut FoodStore {
        &mut self.food
    }

    /// Adds a fully built agent. Counts as a birth.
    pub fn insert_agent(&mut self, agent: Agent) -> Uuid {
        let id = agent.id();
        self.agents.push(agent);
        stats::record_birth(&mut self.stats);
        id
    }

    /// The current state as a render frame, without advancing anything.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.agents, self.food.as_slice(), &self.stats, self.running)
    }

    pub(crate) fn index_of(&self, id: Uuid) -> Option<usize> {
        self.agents.iter().position(|a| a.id() == id)
    }

    pub(crate) fn random_position(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0.0..self.bounds.width),
            self.rng.gen_range(0.0..self.bounds.height),
        )
    }

    /// Hatches `count` agents of random species at random spots.
    pub fn seed_population(&mut self, count: usize) {
        for _ in 0..count {
            let species = species::pick_random_species(&mut self.rng);
            let position = self.random_position();
            let agent = lifecycle::create_agent_with_rng(
                &mut self.rng,
                species,
                position,
                self.now,
                &self.config.metabolism,
            );
            self.insert_agent(agent);
        }
    }

    pub(crate) fn refresh_stats(&mut self) {
        stats::update_population_stats(&mut self.stats, &self.agents, self.food.len());
    }
}

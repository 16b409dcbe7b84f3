pub mod macros;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoal_data::{Agent, Bounds, Food, Position, SpeciesId, Velocity};
use shoal_lib::model::config::SimConfig;
use shoal_lib::model::lifecycle;
use shoal_lib::model::species::CLOWNFISH;
use shoal_lib::model::Ecosystem;

/// Builds an ecosystem with no random population, no floor refill and a
/// fixed seed, then places exactly what the test asks for.
#[allow(dead_code)]
pub struct EcosystemBuilder {
    config: SimConfig,
    bounds: Bounds,
    seed: u64,
    now: u64,
    agents: Vec<Agent>,
    food: Vec<Food>,
}

#[allow(dead_code)]
impl EcosystemBuilder {
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.initial_population = 0;
        config.world.min_population = 0;
        Self {
            config,
            bounds: Bounds::default(),
            seed: 42,
            now: 0,
            agents: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Sets the controller clock; agents built afterwards default to having
    /// just eaten at this time.
    pub fn at_time(mut self, now: u64) -> Self {
        self.now = now;
        self
    }

    /// Turns off the periodic feeder and food expiry.
    pub fn without_feeder(mut self) -> Self {
        self.config.food.spawn_interval = u64::MAX;
        self.config.food.life_span = u64::MAX;
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// A motionless pellet.
    pub fn with_food(mut self, x: f64, y: f64) -> Self {
        self.food.push(Food::new(
            Position::new(x, y),
            Velocity::default(),
            self.now,
            self.config.food.regular_nutrition,
        ));
        self
    }

    pub fn build(self) -> Ecosystem {
        let mut eco =
            Ecosystem::with_rng(self.config, self.bounds, ChaCha8Rng::seed_from_u64(self.seed))
                .expect("Failed to create ecosystem in test builder");
        eco.set_now(self.now);
        for agent in self.agents {
            eco.insert_agent(agent);
        }
        for food in self.food {
            eco.food_mut().insert(food);
        }
        eco
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    species: SpeciesId,
    x: f64,
    y: f64,
    size: f64,
    velocity: Velocity,
    last_fed_at: u64,
    health: f64,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            x: 100.0,
            y: 100.0,
            size: 1.0,
            velocity: Velocity::default(),
            last_fed_at: 0,
            health: 1.0,
        }
    }

    pub fn herbivore() -> Self {
        Self::new(CLOWNFISH)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Velocity::new(vx, vy);
        self
    }

    pub fn last_fed_at(mut self, t: u64) -> Self {
        self.last_fed_at = t;
        self
    }

    pub fn health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn build(self) -> Agent {
        let mut agent = lifecycle::new_agent(
            self.species,
            Position::new(self.x, self.y),
            self.size,
            self.last_fed_at,
        );
        agent.velocity = self.velocity;
        agent.metabolism.health = self.health;
        agent
    }
}

//! Boids steering: separation, alignment, cohesion, food-seeking and
//! boundary avoidance.
//!
//! Everything here is a pure function of one agent and read-only views of
//! the population and the food store. Sums are accumulated in population
//! order so results are reproducible bit for bit.

use crate::config::FlockingConfig;
use crate::food::FoodStore;
use shoal_data::{Agent, Bounds, Position, Velocity};
use std::ops::Add;

/// Separation only considers neighbours this close, relative to the
/// visual range.
const SEPARATION_RANGE_FACTOR: f64 = 0.4;
/// Distance at which a food-seeking agent starts to slow down.
const FOOD_ARRIVAL_DISTANCE: f64 = 100.0;

/// A 2D steering vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force {
    pub x: f64,
    pub y: f64,
}

impl Force {
    pub const ZERO: Force = Force { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescales to `max` if longer than `max`.
    #[must_use]
    pub fn limit(self, max: f64) -> Force {
        let mag = self.magnitude();
        if mag > max {
            Force::new(self.x / mag * max, self.y / mag * max)
        } else {
            self
        }
    }

    #[must_use]
    pub fn scale(self, k: f64) -> Force {
        Force::new(self.x * k, self.y * k)
    }
}

impl Add for Force {
    type Output = Force;

    fn add(self, rhs: Force) -> Force {
        Force::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The individual steering components acting on one agent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub separation: Force,
    pub alignment: Force,
    pub cohesion: Force,
    pub food: Force,
    pub boundary: Force,
}

impl Steering {
    /// Weighted sum of the clamped components plus the raw boundary push.
    ///
    /// The boundary term is deliberately left out of any clamping; near an
    /// edge it dominates the other components.
    #[must_use]
    pub fn combined(&self, config: &FlockingConfig) -> Force {
        Force::new(
            self.separation.x * config.separation_weight
                + self.alignment.x * config.alignment_weight
                + self.cohesion.x * config.cohesion_weight
                + self.food.x * config.food_attraction_weight
                + self.boundary.x,
            self.separation.y * config.separation_weight
                + self.alignment.y * config.alignment_weight
                + self.cohesion.y * config.cohesion_weight
                + self.food.y * config.food_attraction_weight
                + self.boundary.y,
        )
    }
}

/// Reynolds steering: head along `desired` at `speed`, minus the current
/// velocity, clamped to `max_force`. A zero `desired` yields no force.
fn steer_towards(desired: Force, speed: f64, velocity: &Velocity, max_force: f64) -> Force {
    let mag = desired.magnitude();
    if mag <= 0.0 {
        return desired;
    }
    Force::new(
        desired.x / mag * speed - velocity.vx,
        desired.y / mag * speed - velocity.vy,
    )
    .limit(max_force)
}

/// Computes every steering component for `agent`.
///
/// `agents` may contain `agent` itself; it is skipped by id, as is any
/// neighbour sharing its exact position.
#[must_use]
pub fn steer(
    agent: &Agent,
    agents: &[Agent],
    food: &FoodStore,
    bounds: &Bounds,
    config: &FlockingConfig,
) -> Steering {
    let (separation, alignment, cohesion) = flock_forces(agent, agents, config);
    let food = if agent.metabolism.is_starving && !food.is_empty() {
        food_attraction(agent, food, config)
    } else {
        Force::ZERO
    };
    Steering {
        separation,
        alignment,
        cohesion,
        food,
        boundary: boundary_force(&agent.position, bounds, config),
    }
}

fn flock_forces(agent: &Agent, agents: &[Agent], config: &FlockingConfig) -> (Force, Force, Force) {
    let separation_range = config.visual_range * SEPARATION_RANGE_FACTOR;
    let mut away = Force::ZERO;
    let mut away_count = 0usize;
    let mut heading = Force::ZERO;
    let mut center = Force::ZERO;
    let mut neighbour_count = 0usize;

    for other in agents {
        if other.id() == agent.id() {
            continue;
        }
        let dx = agent.position.x - other.position.x;
        let dy = agent.position.y - other.position.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= 0.0 {
            continue;
        }
        if distance < separation_range {
            away.x += dx / distance;
            away.y += dy / distance;
            away_count += 1;
        }
        if distance < config.visual_range {
            heading.x += other.velocity.vx;
            heading.y += other.velocity.vy;
            center.x += other.position.x;
            center.y += other.position.y;
            neighbour_count += 1;
        }
    }

    let separation = if away_count > 0 {
        let mean = away.scale(1.0 / away_count as f64);
        steer_towards(mean, config.max_speed, &agent.velocity, config.max_force)
    } else {
        Force::ZERO
    };

    if neighbour_count == 0 {
        return (separation, Force::ZERO, Force::ZERO);
    }
    let n = neighbour_count as f64;
    let mean_heading = heading.scale(1.0 / n);
    let alignment = steer_towards(
        mean_heading,
        config.max_speed,
        &agent.velocity,
        config.max_force,
    );
    let to_center = Force::new(
        center.x / n - agent.position.x,
        center.y / n - agent.position.y,
    );
    let cohesion = steer_towards(to_center, config.max_speed, &agent.velocity, config.max_force);
    (separation, alignment, cohesion)
}

/// Steers toward the nearest food in range, slowing on arrival.
#[must_use]
pub fn food_attraction(agent: &Agent, food: &FoodStore, config: &FlockingConfig) -> Force {
    let Some(target) = food.nearest_within(&agent.position, config.food_seek_range) else {
        return Force::ZERO;
    };
    let desired = Force::new(
        target.position.x - agent.position.x,
        target.position.y - agent.position.y,
    );
    let dist = desired.magnitude();
    if dist <= 0.0 {
        return Force::ZERO;
    }
    let speed = config.max_speed * (dist / FOOD_ARRIVAL_DISTANCE).min(1.0);
    steer_towards(desired, speed, &agent.velocity, config.max_force * 2.0)
}

/// Constant inward push inside the edge margin, zero elsewhere.
#[must_use]
pub fn boundary_force(position: &Position, bounds: &Bounds, config: &FlockingConfig) -> Force {
    let turn = config.edge_turn_factor;
    let margin = config.edge_margin;
    let axis = |v: f64, extent: f64| {
        if v < margin {
            turn
        } else if v > extent - margin {
            -turn
        } else {
            0.0
        }
    };
    Force::new(axis(position.x, bounds.width), axis(position.y, bounds.height))
}

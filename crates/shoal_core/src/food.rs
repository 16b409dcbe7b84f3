//! Food resource management: spawning, drifting, expiry and lookup.

use crate::config::FoodConfig;
use rand::Rng;
use shoal_data::{Bounds, Food, Position, Velocity};

/// What kind of food item to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    /// Regular pellet from the feeder or a click.
    Pellet,
    /// Remains of a killed or starved fish; more nutritious.
    Carcass,
}

/// Owns every food item in the water.
///
/// Items are kept in insertion order. Lookups that must pick a single item
/// scan newest-first, so the most recently dropped pellet wins ties.
#[derive(Debug, Clone, Default)]
pub struct FoodStore {
    items: Vec<Food>,
    config: FoodConfig,
}

impl FoodStore {
    pub fn new(config: FoodConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.max_food),
            config,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.config.max_food
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Food> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Food] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Registers a fully specified item. Refused when the store is full.
    pub fn insert(&mut self, food: Food) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(food);
        true
    }

    /// Creates a food item, placed uniformly inside `bounds` when no
    /// position is given. Returns `None` when the store is at capacity.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: Option<Position>,
        kind: FoodKind,
        now: u64,
        bounds: &Bounds,
    ) -> Option<&Food> {
        if self.is_full() {
            return None;
        }
        let position = position.unwrap_or_else(|| {
            Position::new(
                rng.gen_range(0.0..bounds.width),
                rng.gen_range(0.0..bounds.height),
            )
        });
        let drift = self.config.drift_speed;
        let velocity = Velocity::new(rng.gen_range(-drift..=drift), rng.gen_range(-drift..=drift));
        let mut food = match kind {
            FoodKind::Pellet => Food::new(position, velocity, now, self.config.regular_nutrition),
            FoodKind::Carcass => Food::new(position, velocity, now, self.config.kill_nutrition),
        };
        food.sourced_from_kill = kind == FoodKind::Carcass;
        self.items.push(food);
        self.items.last()
    }

    /// Bounces items off the viewport edges, moves them, and drops every
    /// item older than the configured life span.
    pub fn drift_and_expire(&mut self, now: u64, bounds: &Bounds, frame_scale: f64) {
        let life_span = self.config.life_span;
        self.items.retain_mut(|food| {
            if food.age_ms(now) > life_span {
                return false;
            }
            if food.position.x < 0.0 || food.position.x > bounds.width {
                food.velocity.vx = -food.velocity.vx;
            }
            if food.position.y < 0.0 || food.position.y > bounds.height {
                food.velocity.vy = -food.velocity.vy;
            }
            food.position.x += food.velocity.vx * frame_scale;
            food.position.y += food.velocity.vy * frame_scale;
            true
        });
    }

    /// Closest item strictly within `max_distance`.
    #[must_use]
    pub fn nearest_within(&self, position: &Position, max_distance: f64) -> Option<&Food> {
        let mut closest = None;
        let mut closest_dist = f64::INFINITY;
        for food in &self.items {
            let dist = position.distance_to(&food.position);
            if dist < closest_dist && dist < max_distance {
                closest_dist = dist;
                closest = Some(food);
            }
        }
        closest
    }

    /// Removes and returns the newest item strictly within `eat_radius`.
    pub fn remove_nearest(&mut self, position: &Position, eat_radius: f64) -> Option<Food> {
        let idx = self
            .items
            .iter()
            .rposition(|food| position.distance_to(&food.position) < eat_radius)?;
        Some(self.items.remove(idx))
    }
}

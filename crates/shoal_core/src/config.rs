//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field has a default, and every section is
//! `#[serde(default)]`, so an empty file (or no file at all) reproduces the
//! stock aquarium.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! initial_population = 30
//! seed = 42
//!
//! [flocking]
//! visual_range = 120.0
//!
//! [food]
//! max_food = 80
//! ```

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Population and clock settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Agents seeded on construction and on reset.
    pub initial_population: usize,
    /// Below this many live agents the controller tops the population up.
    pub min_population: usize,
    /// Agents added when the population falls under `min_population`.
    pub population_refill: usize,
    pub seed: Option<u64>,
    /// Frame length the per-frame velocities are calibrated against.
    pub reference_frame_ms: f64,
    /// Upper bound on a single tick's delta, to avoid catch-up after a pause.
    pub max_frame_delta_ms: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_population: 15,
            min_population: 5,
            population_refill: 3,
            seed: None,
            reference_frame_ms: 1000.0 / 60.0,
            max_frame_delta_ms: 100.0,
        }
    }
}

/// Steering parameters for the boids model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlockingConfig {
    pub max_speed: f64,
    pub max_force: f64,
    pub visual_range: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    pub food_attraction_weight: f64,
    /// Starving agents ignore food further away than this.
    pub food_seek_range: f64,
    pub edge_margin: f64,
    pub edge_turn_factor: f64,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            max_force: 0.04,
            visual_range: 100.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            food_attraction_weight: 2.0,
            food_seek_range: 300.0,
            edge_margin: 50.0,
            edge_turn_factor: 0.5,
        }
    }
}

/// Hunger, starvation and growth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    /// Size lost per millisecond while starving past `starve_threshold`.
    pub base_metabolism: f64,
    /// Seconds without food before an agent is starving.
    pub hunger_threshold: f64,
    /// Seconds without food before starvation starts costing health.
    pub starve_threshold: f64,
    /// Hunger accrued per millisecond while starving.
    pub hunger_rate: f64,
    /// Health lost per millisecond past `starve_threshold`.
    pub health_decay_rate: f64,
    pub death_health_threshold: f64,
    pub growth_rate: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Starved agents larger than this leave a carcass behind.
    pub carcass_min_size: f64,
    /// Eating radius per unit of size.
    pub eat_distance: f64,
    /// Fraction of the prey's size a predator gains.
    pub predation_growth_factor: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            base_metabolism: 0.0003,
            hunger_threshold: 8.0,
            starve_threshold: 30.0,
            hunger_rate: 0.001,
            health_decay_rate: 0.002,
            death_health_threshold: 0.1,
            growth_rate: 0.15,
            min_size: 0.3,
            max_size: 4.0,
            carcass_min_size: 0.5,
            eat_distance: 20.0,
            predation_growth_factor: 0.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReproductionConfig {
    /// Chance that a meal triggers reproduction for a large enough agent.
    pub reproduction_chance: f64,
    pub reproduction_size: f64,
    /// Per-tick chance of reproducing without a meal.
    pub natural_reproduction_chance: f64,
    pub litter_size: usize,
    pub offspring_size: f64,
    /// Distance from the parent at which offspring appear.
    pub offspring_distance: f64,
    pub cooldown_ms: u64,
}

impl Default for ReproductionConfig {
    fn default() -> Self {
        Self {
            reproduction_chance: 0.015,
            reproduction_size: 1.8,
            natural_reproduction_chance: 0.001,
            litter_size: 2,
            offspring_size: 0.8,
            offspring_distance: 40.0,
            cooldown_ms: 10_000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FoodConfig {
    /// Milliseconds a food item stays in the water.
    pub life_span: u64,
    /// Milliseconds between automatic food drops.
    pub spawn_interval: u64,
    /// Spawns are refused once the store holds this many items.
    pub max_food: usize,
    /// Largest drift velocity component of a fresh pellet.
    pub drift_speed: f64,
    pub regular_nutrition: f64,
    pub kill_nutrition: f64,
    /// Pellets scattered by a single click.
    pub click_count: usize,
    pub click_scatter_radius: f64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            life_span: 10_000,
            spawn_interval: 2_000,
            max_food: 50,
            drift_speed: 0.25,
            regular_nutrition: 1.0,
            kill_nutrition: 4.0,
            click_count: 3,
            click_scatter_radius: 30.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub flocking: FlockingConfig,
    pub metabolism: MetabolismConfig,
    pub reproduction: ReproductionConfig,
    pub food: FoodConfig,
}

macro_rules! ensure_config {
    ($cond:expr, $msg:expr) => {
        if !($cond) {
            return Err(SimError::invalid_config($msg));
        }
    };
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation found. Values that would silently break
    /// the size or health invariants are rejected here rather than clamped
    /// later. Every float must be finite.
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        ensure_config!(
            is_positive(w.reference_frame_ms),
            "Reference frame length must be positive"
        );
        ensure_config!(
            is_non_negative(w.max_frame_delta_ms),
            "Max frame delta must be non-negative"
        );
        ensure_config!(
            w.initial_population <= 10_000,
            "Initial population too large (max 10000)"
        );
        ensure_config!(
            w.min_population == 0 || w.population_refill > 0,
            "Population refill must be positive when min_population is set"
        );

        let f = &self.flocking;
        ensure_config!(is_positive(f.max_speed), "Max speed must be positive");
        ensure_config!(is_non_negative(f.max_force), "Max force must be non-negative");
        ensure_config!(is_positive(f.visual_range), "Visual range must be positive");
        ensure_config!(
            is_non_negative(f.separation_weight)
                && is_non_negative(f.alignment_weight)
                && is_non_negative(f.cohesion_weight)
                && is_non_negative(f.food_attraction_weight),
            "Steering weights must be non-negative"
        );
        ensure_config!(is_non_negative(f.food_seek_range), "Food seek range must be non-negative");
        ensure_config!(
            is_non_negative(f.edge_margin) && is_non_negative(f.edge_turn_factor),
            "Edge margin and turn factor must be non-negative"
        );

        let m = &self.metabolism;
        ensure_config!(is_positive(m.min_size), "Min size must be positive");
        ensure_config!(
            m.max_size.is_finite() && m.min_size <= m.max_size,
            format!("Min size {} exceeds max size {}", m.min_size, m.max_size)
        );
        ensure_config!(
            is_non_negative(m.hunger_threshold)
                && m.starve_threshold.is_finite()
                && m.hunger_threshold <= m.starve_threshold,
            "Hunger threshold must be in [0, starve_threshold]"
        );
        ensure_config!(
            is_non_negative(m.base_metabolism)
                && is_non_negative(m.hunger_rate)
                && is_non_negative(m.health_decay_rate),
            "Metabolic rates must be non-negative"
        );
        ensure_config!(
            is_non_negative(m.carcass_min_size),
            "Carcass min size must be non-negative"
        );
        ensure_config!(
            is_probability(m.death_health_threshold),
            "Death health threshold must be in [0.0, 1.0]"
        );
        ensure_config!(is_non_negative(m.growth_rate), "Growth rate must be non-negative");
        ensure_config!(is_non_negative(m.eat_distance), "Eat distance must be non-negative");
        ensure_config!(
            is_non_negative(m.predation_growth_factor),
            "Predation growth factor must be non-negative"
        );

        let r = &self.reproduction;
        ensure_config!(
            is_probability(r.reproduction_chance),
            "Reproduction chance must be in [0.0, 1.0]"
        );
        ensure_config!(
            is_probability(r.natural_reproduction_chance),
            "Natural reproduction chance must be in [0.0, 1.0]"
        );
        ensure_config!(
            r.reproduction_size.is_finite(),
            "Reproduction size must be finite"
        );
        ensure_config!(
            r.offspring_size >= m.min_size && r.offspring_size <= m.max_size,
            "Offspring size must lie within [min_size, max_size]"
        );
        ensure_config!(is_non_negative(r.offspring_distance), "Offspring distance must be non-negative");

        let food = &self.food;
        ensure_config!(food.max_food <= 10_000, "Max food too large (max 10000)");
        ensure_config!(is_non_negative(food.drift_speed), "Food drift speed must be non-negative");
        ensure_config!(
            is_non_negative(food.regular_nutrition) && is_non_negative(food.kill_nutrition),
            "Nutrition must be non-negative"
        );
        ensure_config!(
            is_non_negative(food.click_scatter_radius),
            "Click scatter radius must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Stable hash of every tunable, used to tag runs in the logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.flocking).as_bytes());
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.reproduction).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Converts a tick delta into multiples of the reference frame.
    #[must_use]
    pub fn frame_scale(&self, delta_ms: f64) -> f64 {
        delta_ms / self.world.reference_frame_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_size_above_max_size() {
        let config = SimConfig {
            metabolism: MetabolismConfig {
                min_size: 5.0,
                max_size: 4.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Min size"));
    }

    #[test]
    fn test_invalid_reproduction_chance() {
        let config = SimConfig {
            reproduction: ReproductionConfig {
                reproduction_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hunger_after_starvation_rejected() {
        let config = SimConfig {
            metabolism: MetabolismConfig {
                hunger_threshold: 40.0,
                starve_threshold: 30.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_offspring_size_outside_range() {
        let config = SimConfig {
            reproduction: ReproductionConfig {
                offspring_size: 0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_speed_rejected() {
        let config = SimConfig {
            flocking: FlockingConfig {
                max_speed: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_infinite_drift_speed_rejected() {
        let result = SimConfig::from_toml("[food]\ndrift_speed = inf\n");
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        let cases: Vec<fn(&mut SimConfig)> = vec![
            |c| c.world.reference_frame_ms = f64::INFINITY,
            |c| c.world.max_frame_delta_ms = f64::NAN,
            |c| c.flocking.max_force = f64::INFINITY,
            |c| c.flocking.visual_range = f64::INFINITY,
            |c| c.flocking.cohesion_weight = f64::NAN,
            |c| c.metabolism.max_size = f64::INFINITY,
            |c| c.metabolism.eat_distance = f64::INFINITY,
            |c| c.reproduction.offspring_distance = f64::NAN,
            |c| c.food.drift_speed = f64::INFINITY,
            |c| c.food.click_scatter_radius = f64::INFINITY,
        ];
        for (i, mutate) in cases.into_iter().enumerate() {
            let mut config = SimConfig::default();
            mutate(&mut config);
            assert!(config.validate().is_err(), "case {i} accepted");
        }
    }

    #[test]
    fn test_floor_without_refill_rejected() {
        let mut config = SimConfig::default();
        config.world.population_refill = 0;
        assert!(config.validate().is_err());
        config.world.min_population = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimConfig::from_toml("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = SimConfig::from_toml(
            "[world]\nseed = 7\n\n[flocking]\nvisual_range = 120.0\n",
        )
        .unwrap();
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.flocking.visual_range, 120.0);
        assert_eq!(config.flocking.max_speed, 2.0);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let result = SimConfig::from_toml("[metabolism]\nmin_size = 9.0\n");
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = SimConfig::from_toml("[world\n");
        assert!(matches!(result, Err(SimError::ConfigParse(_))));
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = SimConfig::default();
        let mut config2 = SimConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());
        config2.flocking.max_force = 0.05;
        assert_ne!(config1.fingerprint(), config2.fingerprint());
    }

    #[test]
    fn test_frame_scale() {
        let config = SimConfig::default();
        assert!((config.frame_scale(1000.0 / 60.0) - 1.0).abs() < 1e-12);
        assert_eq!(config.frame_scale(0.0), 0.0);
    }
}

//! Agent lifecycle: hatching, growth, the starvation state machine,
//! breeding eligibility and motion integration.

use crate::config::{MetabolismConfig, ReproductionConfig, SimConfig};
use crate::flocking::Force;
use rand::Rng;
use shoal_data::{
    Agent, AgentStatus, Identity, Metabolism, Position, Reproduction, SpeciesId, Velocity,
};
use std::f64::consts::TAU;
use uuid::Uuid;

/// Health below which renderers flag an agent as critical.
pub const LOW_HEALTH: f64 = 0.3;

/// Outcome of a metabolism step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vitality {
    Alive,
    Starved,
}

/// Builds an agent with a fixed body and no motion.
pub fn new_agent(species: SpeciesId, position: Position, size: f64, now: u64) -> Agent {
    Agent {
        identity: Identity {
            id: Uuid::new_v4(),
            parent_id: None,
        },
        species,
        position,
        velocity: Velocity::default(),
        metabolism: Metabolism {
            size,
            hunger: 0.0,
            last_fed_at: now,
            health: 1.0,
            is_starving: false,
            age: 0.0,
            born_at: now,
        },
        reproduction: Reproduction::default(),
    }
}

/// Builds a freshly hatched agent with randomized drift, size and hunger.
///
/// The drawn size is held inside `[min_size, max_size]`.
pub fn create_agent_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    species: SpeciesId,
    position: Position,
    now: u64,
    config: &MetabolismConfig,
) -> Agent {
    let size = rng
        .gen_range(1.0_f64..1.5)
        .clamp(config.min_size, config.max_size);
    let mut agent = new_agent(species, position, size, now);
    agent.identity.id = Uuid::from_u128(rng.gen::<u128>());
    agent.velocity = Velocity::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    agent.metabolism.hunger = rng.gen_range(0.0..0.5);
    agent
}

/// Grows an agent, never beyond `max_size`.
pub fn grow(agent: &mut Agent, amount: f64, config: &MetabolismConfig) {
    agent.metabolism.size = (agent.metabolism.size + amount).min(config.max_size);
}

/// Marks a meal: clears hunger and starvation.
pub fn mark_fed(agent: &mut Agent, now: u64) {
    agent.metabolism.hunger = 0.0;
    agent.metabolism.is_starving = false;
    agent.metabolism.last_fed_at = now;
}

/// Advances hunger, starvation damage and reproduction eligibility.
///
/// Returns `Vitality::Starved` when health reaches the death threshold; the
/// caller is responsible for removing the agent.
pub fn update_metabolism(agent: &mut Agent, now: u64, delta_ms: f64, config: &SimConfig) -> Vitality {
    let m = &config.metabolism;
    let seconds_since_fed = now.saturating_sub(agent.metabolism.last_fed_at) as f64 / 1000.0;

    if seconds_since_fed > m.hunger_threshold {
        agent.metabolism.is_starving = true;
        agent.metabolism.hunger += m.hunger_rate * delta_ms;

        if seconds_since_fed > m.starve_threshold {
            agent.metabolism.health =
                (agent.metabolism.health - m.health_decay_rate * delta_ms).max(0.0);
            agent.metabolism.size =
                (agent.metabolism.size - m.base_metabolism * delta_ms).max(m.min_size);

            if agent.metabolism.health <= m.death_health_threshold {
                return Vitality::Starved;
            }
        }
    } else {
        agent.metabolism.is_starving = false;
    }

    refresh_reproduction(agent, now, &config.reproduction);
    Vitality::Alive
}

/// Recomputes `can_reproduce` from size and cooldown.
pub fn refresh_reproduction(agent: &mut Agent, now: u64, config: &ReproductionConfig) {
    if agent.reproduction.cooldown_until.is_some() && !agent.reproduction.cooling_down(now) {
        agent.reproduction.cooldown_until = None;
    }
    agent.reproduction.can_reproduce =
        agent.metabolism.size >= config.reproduction_size && !agent.reproduction.cooling_down(now);
}

/// Starts the post-reproduction cooldown.
pub fn start_cooldown(agent: &mut Agent, now: u64, config: &ReproductionConfig) {
    agent.reproduction.can_reproduce = false;
    agent.reproduction.cooldown_until = Some(now + config.cooldown_ms);
}

/// Spots around `parent` where its litter appears, evenly spread on a circle.
pub fn offspring_positions(parent: &Agent, config: &ReproductionConfig) -> Vec<Position> {
    let n = config.litter_size;
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Position::new(
                parent.position.x + angle.cos() * config.offspring_distance,
                parent.position.y + angle.sin() * config.offspring_distance,
            )
        })
        .collect()
}

/// Speed cap for an agent; larger fish are slower.
#[must_use]
pub fn max_speed_for(agent: &Agent, config: &SimConfig) -> f64 {
    config.flocking.max_speed / agent.metabolism.size
}

/// Applies a steering force over `delta_ms` and moves the agent.
///
/// Velocities are expressed per reference frame, so both the velocity change
/// and the displacement scale with `delta_ms / reference_frame_ms`. A zero
/// delta leaves the agent untouched.
pub fn integrate(agent: &mut Agent, force: Force, delta_ms: f64, config: &SimConfig) {
    if delta_ms <= 0.0 {
        return;
    }
    let scale = config.frame_scale(delta_ms);
    agent.velocity.vx += force.x * scale;
    agent.velocity.vy += force.y * scale;

    let max_speed = max_speed_for(agent, config);
    let speed = agent.velocity.speed();
    if speed > max_speed {
        agent.velocity.vx = agent.velocity.vx / speed * max_speed;
        agent.velocity.vy = agent.velocity.vy / speed * max_speed;
    }

    agent.position.x += agent.velocity.vx * scale;
    agent.position.y += agent.velocity.vy * scale;
    agent.metabolism.age += delta_ms / 1000.0;
}

/// Coarse state shown by renderers. Low health outranks starvation.
pub fn calculate_status(metabolism: &Metabolism) -> AgentStatus {
    if metabolism.health < LOW_HEALTH {
        AgentStatus::Critical
    } else if metabolism.is_starving {
        AgentStatus::Starving
    } else {
        AgentStatus::Healthy
    }
}

pub fn get_agent_status(agent: &Agent) -> AgentStatus {
    calculate_status(&agent.metabolism)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::CLOWNFISH;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn agent_at(x: f64, y: f64) -> Agent {
        new_agent(CLOWNFISH, Position::new(x, y), 1.0, 0)
    }

    #[test]
    fn test_create_agent_with_rng_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..50 {
            let a = create_agent_with_rng(
                &mut rng,
                CLOWNFISH,
                Position::new(1.0, 2.0),
                100,
                &MetabolismConfig::default(),
            );
            assert!((1.0..1.5).contains(&a.metabolism.size));
            assert!((0.0..0.5).contains(&a.metabolism.hunger));
            assert_eq!(a.metabolism.health, 1.0);
            assert_eq!(a.metabolism.last_fed_at, 100);
            assert!(!a.reproduction.can_reproduce);
        }
    }

    #[test]
    fn test_same_seed_same_ids() {
        let a = create_agent_with_rng(
            &mut ChaCha8Rng::seed_from_u64(5),
            CLOWNFISH,
            Position::default(),
            0,
            &MetabolismConfig::default(),
        );
        let b = create_agent_with_rng(
            &mut ChaCha8Rng::seed_from_u64(5),
            CLOWNFISH,
            Position::default(),
            0,
            &MetabolismConfig::default(),
        );
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_hatch_size_respects_narrow_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let capped = MetabolismConfig {
            max_size: 1.2,
            ..Default::default()
        };
        let raised = MetabolismConfig {
            min_size: 1.3,
            ..Default::default()
        };
        for _ in 0..50 {
            let a = create_agent_with_rng(&mut rng, CLOWNFISH, Position::default(), 0, &capped);
            assert!(a.metabolism.size >= 1.0 && a.metabolism.size <= 1.2);
            let b = create_agent_with_rng(&mut rng, CLOWNFISH, Position::default(), 0, &raised);
            assert!(b.metabolism.size >= 1.3 && b.metabolism.size < 1.5);
        }
    }

    #[test]
    fn test_grow_clamped() {
        let config = MetabolismConfig::default();
        let mut a = agent_at(0.0, 0.0);
        grow(&mut a, 10.0, &config);
        assert_eq!(a.metabolism.size, config.max_size);
    }

    #[test]
    fn test_hungry_but_not_starving_yet() {
        let config = SimConfig::default();
        let mut a = agent_at(0.0, 0.0);
        assert_eq!(update_metabolism(&mut a, 8_000, 16.0, &config), Vitality::Alive);
        assert!(!a.metabolism.is_starving);

        assert_eq!(update_metabolism(&mut a, 8_001, 16.0, &config), Vitality::Alive);
        assert!(a.metabolism.is_starving);
        assert!((a.metabolism.hunger - 0.016).abs() < 1e-12);
        assert_eq!(a.metabolism.health, 1.0);
    }

    #[test]
    fn test_starvation_damage_and_death() {
        let config = SimConfig::default();
        let mut a = agent_at(0.0, 0.0);
        let now = 31_000;
        assert_eq!(update_metabolism(&mut a, now, 100.0, &config), Vitality::Alive);
        assert!((a.metabolism.health - 0.8).abs() < 1e-12);
        assert!((a.metabolism.size - 0.97).abs() < 1e-12);

        assert_eq!(update_metabolism(&mut a, now, 400.0, &config), Vitality::Starved);
        assert!(a.metabolism.health <= config.metabolism.death_health_threshold);
        assert!(a.metabolism.health >= 0.0);
    }

    #[test]
    fn test_starvation_never_shrinks_below_min_size() {
        let config = SimConfig::default();
        let mut a = agent_at(0.0, 0.0);
        a.metabolism.size = 0.31;
        update_metabolism(&mut a, 40_000, 40.0, &config);
        assert_eq!(a.metabolism.size, config.metabolism.min_size);
    }

    #[test]
    fn test_reproduction_gated_by_size_and_cooldown() {
        let config = SimConfig::default();
        let mut a = agent_at(0.0, 0.0);
        a.metabolism.size = 2.0;
        refresh_reproduction(&mut a, 0, &config.reproduction);
        assert!(a.reproduction.can_reproduce);

        start_cooldown(&mut a, 1_000, &config.reproduction);
        refresh_reproduction(&mut a, 10_999, &config.reproduction);
        assert!(!a.reproduction.can_reproduce);
        refresh_reproduction(&mut a, 11_000, &config.reproduction);
        assert!(a.reproduction.can_reproduce);
        assert!(a.reproduction.cooldown_until.is_none());
    }

    #[test]
    fn test_offspring_positions_opposite_sides() {
        let config = ReproductionConfig::default();
        let parent = agent_at(100.0, 100.0);
        let spots = offspring_positions(&parent, &config);
        assert_eq!(spots.len(), 2);
        assert!((spots[0].x - 140.0).abs() < 1e-9 && (spots[0].y - 100.0).abs() < 1e-9);
        assert!((spots[1].x - 60.0).abs() < 1e-9 && (spots[1].y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_integrate_zero_delta_is_noop() {
        let config = SimConfig::default();
        let mut a = agent_at(10.0, 10.0);
        a.velocity = Velocity::new(3.0, 3.0);
        let before = a.clone();
        integrate(&mut a, Force::new(1.0, 1.0), 0.0, &config);
        assert_eq!(a, before);
    }

    #[test]
    fn test_integrate_clamps_speed_by_size() {
        let config = SimConfig::default();
        let mut a = agent_at(10.0, 10.0);
        a.metabolism.size = 2.0;
        integrate(&mut a, Force::new(5.0, 0.0), config.world.reference_frame_ms, &config);
        assert!((a.velocity.speed() - 1.0).abs() < 1e-12);
        assert!((a.position.x - 11.0).abs() < 1e-12);
        assert!((a.metabolism.age - config.world.reference_frame_ms / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_status() {
        let mut a = agent_at(0.0, 0.0);
        assert_eq!(get_agent_status(&a), AgentStatus::Healthy);
        a.metabolism.is_starving = true;
        assert_eq!(get_agent_status(&a), AgentStatus::Starving);
        a.metabolism.health = 0.2;
        assert_eq!(get_agent_status(&a), AgentStatus::Critical);
    }
}

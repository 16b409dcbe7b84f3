//! Render-ready views handed to the presentation layer after each tick.

use crate::lifecycle::{self, LOW_HEALTH};
use crate::species;
use shoal_data::{Agent, AgentStatus, Food, SpeciesId, Stats};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AgentView {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Heading in radians.
    pub angle: f64,
    pub size: f64,
    /// Body length in pixels.
    pub render_size: f64,
    pub color: String,
    pub species: SpeciesId,
    pub starving: bool,
    pub low_health: bool,
    pub status: AgentStatus,
}

impl AgentView {
    pub fn from_agent(agent: &Agent) -> Self {
        let s = species::species(agent.species);
        Self {
            id: agent.id(),
            x: agent.position.x,
            y: agent.position.y,
            vx: agent.velocity.vx,
            vy: agent.velocity.vy,
            angle: agent.velocity.heading(),
            size: agent.metabolism.size,
            render_size: s.base_size * agent.metabolism.size,
            color: s.color.to_string(),
            species: agent.species,
            starving: agent.metabolism.is_starving,
            low_health: agent.metabolism.health < LOW_HEALTH,
            status: lifecycle::get_agent_status(agent),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoodView {
    pub x: f64,
    pub y: f64,
    pub sourced_from_kill: bool,
}

impl From<&Food> for FoodView {
    fn from(food: &Food) -> Self {
        Self {
            x: food.position.x,
            y: food.position.y,
            sourced_from_kill: food.sourced_from_kill,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub agents: Vec<AgentView>,
    pub food: Vec<FoodView>,
    pub stats: Stats,
    pub running: bool,
}

impl Frame {
    pub fn capture(agents: &[Agent], food: &[Food], stats: &Stats, running: bool) -> Self {
        Self {
            agents: agents.iter().map(AgentView::from_agent).collect(),
            food: food.iter().map(FoodView::from).collect(),
            stats: stats.clone(),
            running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::new_agent;
    use crate::species::GOLDEN_TANG;
    use shoal_data::{Position, Velocity};

    #[test]
    fn test_agent_view() {
        let mut a = new_agent(GOLDEN_TANG, Position::new(3.0, 4.0), 2.0, 0);
        a.velocity = Velocity::new(0.0, 1.0);
        a.metabolism.health = 0.25;
        let view = AgentView::from_agent(&a);
        assert_eq!(view.render_size, 56.0);
        assert_eq!(view.color, "#FFD166");
        assert!(view.low_health);
        assert_eq!(view.status, AgentStatus::Critical);
        assert!((view.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_frame_serializes() {
        let a = new_agent(GOLDEN_TANG, Position::new(3.0, 4.0), 1.0, 0);
        let frame = Frame::capture(&[a], &[], &Stats::default(), true);
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"running\":true"));
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}

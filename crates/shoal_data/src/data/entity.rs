use super::species::SpeciesId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Velocity in viewport units per reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Heading in radians, as used by renderers to rotate the sprite.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.vy.atan2(self.vx)
    }
}

/// Unique identification of an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
}

/// Body and hunger state of an agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metabolism {
    /// Size multiplier, kept within the configured size range.
    pub size: f64,
    pub hunger: f64,
    /// Simulation timestamp (ms) of the last meal.
    pub last_fed_at: u64,
    /// 1.0 is full health; the agent dies at the death threshold.
    pub health: f64,
    pub is_starving: bool,
    /// Seconds lived.
    pub age: f64,
    pub born_at: u64,
}

/// Reproduction eligibility.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reproduction {
    pub can_reproduce: bool,
    /// While `now` is before this timestamp the agent cannot reproduce.
    pub cooldown_until: Option<u64>,
}

impl Reproduction {
    #[must_use]
    pub fn cooling_down(&self, now: u64) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }
}

/// A single fish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(flatten)]
    pub identity: Identity,
    pub species: SpeciesId,
    pub position: Position,
    pub velocity: Velocity,
    pub metabolism: Metabolism,
    pub reproduction: Reproduction,
}

impl Agent {
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    #[must_use]
    pub fn distance_to(&self, other: &Agent) -> f64 {
        self.position.distance_to(&other.position)
    }
}

/// Coarse health state, mostly for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Healthy,
    Starving,
    Critical,
}

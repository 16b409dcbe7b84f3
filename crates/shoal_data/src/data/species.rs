use serde::{Deserialize, Serialize};

/// Number of species in the fixed catalog.
pub const SPECIES_COUNT: usize = 4;

/// Feeding strategy of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Herbivore,
    Omnivore,
    Carnivore,
    Apex,
}

impl Diet {
    /// Whether agents with this diet hunt other agents.
    #[must_use]
    pub fn is_predatory(self) -> bool {
        matches!(self, Diet::Carnivore | Diet::Apex)
    }
}

/// Handle into the species catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub u8);

impl SpeciesId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable description of a kind of fish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Species {
    pub name: &'static str,
    /// `#RRGGBB`, only meaningful to renderers.
    pub color: &'static str,
    /// Rendered body length in pixels at size 1.0.
    pub base_size: f64,
    pub base_speed: f64,
    pub diet: Diet,
    pub trophic_level: u8,
    /// Trophic levels this species may prey upon. Always strictly below
    /// `trophic_level`.
    pub edible_levels: &'static [u8],
}

impl Species {
    #[must_use]
    pub fn can_eat_level(&self, level: u8) -> bool {
        self.edible_levels.contains(&level)
    }
}

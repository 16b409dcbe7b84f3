//! Plain data types shared by the Shoal simulation crates.
//!
//! Everything here is inert state: agents, food, species records and
//! population counters. Behaviour lives in `shoal_core`.

pub mod data;

pub use data::entity::{Agent, AgentStatus, Identity, Metabolism, Position, Reproduction, Velocity};
pub use data::food::Food;
pub use data::species::{Diet, Species, SpeciesId, SPECIES_COUNT};
pub use data::stats::Stats;
pub use data::viewport::Bounds;

//! # Shoal Core
//!
//! The simulation engine for Shoal, a fish-tank ecosystem.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Boids flocking with food seeking and edge avoidance
//! - A four-level food chain with predation
//! - Hunger, starvation and size-gated reproduction
//! - Drifting, expiring food
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! An [`Ecosystem`] owns every agent and food item. The presentation layer
//! calls [`Ecosystem::tick`] once per frame and renders the returned
//! [`Frame`]; user input arrives as [`Command`]s between ticks. All
//! randomness flows through one seeded `ChaCha8Rng`, so equal seeds and
//! equal tick sequences give equal runs.
//!
//! ## Example
//!
//! ```
//! use shoal_core::{Ecosystem, SimConfig};
//! use shoal_data::Bounds;
//!
//! let mut config = SimConfig::default();
//! config.world.seed = Some(42);
//! let mut eco = Ecosystem::new(config, Bounds::new(800.0, 600.0)).unwrap();
//!
//! eco.feed_at(400.0, 300.0);
//! let frame = eco.tick(16, 16.0);
//! assert_eq!(frame.agents.len(), frame.stats.population);
//! ```

/// Frame delta computation
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// The simulation controller and its commands
pub mod ecosystem;
/// Error types
pub mod error;
/// Boids steering forces
pub mod flocking;
/// Food resource management and spawning
pub mod food;
/// Agent lifecycle management (birth, growth, hunger, death)
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Render-ready views of the simulation state
pub mod snapshot;
/// Species catalog and food-chain rules
pub mod species;
/// Population statistics
pub mod stats;

pub use clock::FrameClock;
pub use config::SimConfig;
pub use ecosystem::{Command, Ecosystem};
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use snapshot::{AgentView, FoodView, Frame};

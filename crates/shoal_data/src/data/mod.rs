//! Core data structures for the Shoal simulation.

pub mod entity;
pub mod food;
pub mod species;
pub mod stats;
pub mod viewport;

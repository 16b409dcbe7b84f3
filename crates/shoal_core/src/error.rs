//! Error types for the simulation core.
//!
//! The engine itself never fails at runtime: feeding, predation and
//! reproduction attempts that find nothing to do are plain no-ops. Errors
//! only arise when building an ecosystem from bad input.

use thiserror::Error;

/// Main error type for `shoal_core` operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is outside its sane range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Viewport dimensions are not finite and positive.
    #[error("Invalid viewport bounds: {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Result type alias for `shoal_core` operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration validation error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

//! Error types for a3s-schedule
//!
//! Parsing and building cron expressions never fail; these errors cover the
//! ambient operations around them (configuration files, the preview
//! collaborator, JSON exchange with the host).

use thiserror::Error;

/// Errors that can occur around the schedule editor
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The preview collaborator failed or is unavailable
    #[error("Preview error: {0}")]
    Preview(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse failure
    #[error("Invalid TOML: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML write failure
    #[error("Failed to encode TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for schedule operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

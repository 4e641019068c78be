//! Error types for the navigation system

use thiserror::Error;

/// Navigation system errors
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A choreographer already exists for the scene
    #[error("Only a single choreographer is allowed per scene (scene '{0}' already has one)")]
    DuplicateChoreographer(String),

    /// Invalid configuration
    #[error("Invalid navigation configuration: {0}")]
    InvalidConfig(String),

    /// TOML configuration could not be parsed
    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON configuration could not be parsed
    #[error("Failed to parse JSON configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

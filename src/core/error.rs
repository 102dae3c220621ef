//! Error types for core module
//!
//! Provides custom error types for core functionality, which here means settings persistence.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// The platform reported no home/config directory
    #[error("No configuration directory available on this platform")]
    MissingConfigDir,
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

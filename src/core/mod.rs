//! Core module - configuration and application infrastructure
//!
//! Everything the game needs before the first move is played: user settings, where they live on
//! disk, and the errors that loading or saving them can raise.
//!
//! # Module Organization
//!
//! - `settings` - [`GameSettings`], the user preferences (mode, timer, AI tuning)
//! - `settings_persistence` - JSON load/save in the user's config directory
//! - `error` - [`CoreError`] and the [`CoreResult`] alias

pub mod error;
pub mod settings;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use settings::GameSettings;
pub use settings_persistence::{load_settings, save_settings, settings_path};

//! Infrastructure layer with system adapters.

/// System clock adapter.
pub mod clock;
/// Application configuration.
pub mod config;

pub use clock::SystemClock;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};

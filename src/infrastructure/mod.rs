//! Infrastructure layer with configuration and vocabulary sources.

/// Application configuration.
pub mod config;
/// Vocabulary source adapters.
pub mod source;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use source::BuiltinWordbook;

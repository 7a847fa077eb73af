//! Configuration management
//!
//! Configuration is read from a TOML file (`liveddm.toml` by default) with
//! `${VAR}` environment-variable substitution, so the vendor API key can
//! live in the environment rather than on disk. See [`load_config`].

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{ApiConfig, ApplicationConfig, LiveDdmConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};

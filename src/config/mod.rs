//! Configuration module.
//!
//! Handles loading from an optional TOML file, merging CLI arguments on top,
//! and validating the result before the crawl starts.

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, SessionConfig, TargetConfig};
pub use validation::validate_config;

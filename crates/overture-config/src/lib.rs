//! Overture configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults matching the shipped launcher, so a missing or
//! partial config works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use overture_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod error;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use error::ConfigError;
pub use schema::OvertureConfig;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<OvertureConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &OvertureConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

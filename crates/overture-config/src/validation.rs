//! Configuration validation.
//!
//! Validates window dimensions and server settings, collecting all errors.

use crate::error::ConfigError;
use crate::schema::OvertureConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OvertureConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 200, 10000);
    validate_range(&mut errors, "window.height", config.window.height, 200, 10000);

    // Server constraints
    if config.server.command.trim().is_empty() {
        errors.push("server.command must not be empty".into());
    }
    if !config.server.url.starts_with("http://") && !config.server.url.starts_with("https://") {
        errors.push(format!(
            "server.url = {:?} must start with http:// or https://",
            config.server.url
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!(
            "{name} = {value} is out of range [{min}, {max}]"
        ));
    }
}

//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Static window title.
    pub title: String,
    /// Update the title bar with the page-reported document title.
    pub dynamic_title: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "Music Explorer".into(),
            dynamic_title: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert_eq!(config.title, "Music Explorer");
        assert!(config.dynamic_title);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
width = 1600
title = "My Explorer"
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.title, "My Explorer");
        // Defaults preserved
        assert_eq!(config.height, 800);
        assert!(config.dynamic_title);
    }
}

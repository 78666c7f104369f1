//! Visualization server configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for the spawned visualization server process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Command line handed to the platform shell.
    pub command: String,
    /// Working directory for the server process.
    /// Unset means the parent of the launcher's own directory.
    pub working_dir: Option<PathBuf>,
    /// URL the window loads once created.
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: "streamlit run Music-Explorer.py".into(),
            working_dir: None,
            url: "http://localhost:8501".into(),
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
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.command, "streamlit run Music-Explorer.py");
        assert!(config.working_dir.is_none());
        assert_eq!(config.url, "http://localhost:8501");
    }

    #[test]
    fn server_config_partial_toml() {
        let toml_str = r#"
command = "python -m http.server 8501"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.command, "python -m http.server 8501");
        // Defaults preserved
        assert!(config.working_dir.is_none());
        assert_eq!(config.url, "http://localhost:8501");
    }

    #[test]
    fn server_config_working_dir_in_toml() {
        let toml_str = r#"
working_dir = "/opt/music-explorer"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.working_dir.as_deref(),
            Some(std::path::Path::new("/opt/music-explorer"))
        );
    }
}

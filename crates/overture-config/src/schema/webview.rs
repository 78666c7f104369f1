//! WebView configuration types.

use serde::{Deserialize, Serialize};

/// WebView behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewConfig {
    /// Enable the devtools inspector (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
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
    fn webview_config_defaults() {
        let config = WebViewConfig::default();
        assert_eq!(config.devtools, cfg!(debug_assertions));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn webview_config_partial_toml() {
        let toml_str = r#"
devtools = true
user_agent = "Overture/0.1"
"#;
        let config: WebViewConfig = toml::from_str(toml_str).unwrap();
        assert!(config.devtools);
        assert_eq!(config.user_agent.as_deref(), Some("Overture/0.1"));
    }
}

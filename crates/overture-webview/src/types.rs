/// Configuration for creating the launcher webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// URL to load once the webview exists.
    pub url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl WebViewConfig {
    /// Create a config that loads `url` with launcher defaults.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
            user_agent: Some("Overture/0.1".to_string()),
            clipboard: true,
            autoplay: true,
        }
    }
}

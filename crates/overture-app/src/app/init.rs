//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use overture_webview::WebViewConfig;

use super::core::LauncherApp;

impl LauncherApp {
    /// Create the window and attach the webview pointed at the server URL.
    /// Returns `false` if initialization failed and the event loop should exit.
    ///
    /// The URL is loaded immediately, with no readiness check against the
    /// server. If the server is not listening yet, the platform webview
    /// shows its error page until the user reloads.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut webview_config = WebViewConfig::new(self.config.server.url.as_str());
        webview_config.devtools = self.config.webview.devtools;
        if let Some(ua) = &self.config.webview.user_agent {
            webview_config.user_agent = Some(ua.clone());
        }

        let size = window.inner_size();
        let webview = match self.webview_host.create(
            window.as_ref(),
            size.width,
            size.height,
            webview_config,
        ) {
            Ok(wv) => wv,
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        };

        tracing::info!(url = %webview.current_url(), "Window created");

        self.webview = Some(webview);
        self.window = Some(window);
        true
    }

    /// Resize the webview to track the window's client area.
    pub(super) fn sync_webview_bounds(&self, width: u32, height: u32) {
        if let Some(ref webview) = self.webview {
            if let Err(e) = webview.resize(width, height) {
                tracing::warn!("Failed to resize webview: {e}");
            }
        }
    }
}

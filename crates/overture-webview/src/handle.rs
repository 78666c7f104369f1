use wry::WebView;

/// Handle to the launcher webview. Tracks the current URL and title
/// best-effort alongside the underlying `wry::WebView`.
pub struct WebViewHandle {
    pub(crate) webview: WebView,
    pub(crate) current_url: String,
    pub(crate) current_title: String,
}

impl WebViewHandle {
    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Resize the webview to cover a window client area of the given
    /// physical size.
    pub fn resize(&self, width: u32, height: u32) -> Result<(), wry::Error> {
        self.webview.set_bounds(full_window_bounds(width, height))
    }
}

/// Bounds covering the full client area of a window with the given
/// physical size.
pub(crate) fn full_window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

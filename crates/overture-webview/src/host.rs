//! WebView creation and event collection.

use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::handle::{full_window_bounds, WebViewHandle};
use crate::types::WebViewConfig;

/// Hosts the launcher's single webview and collects its events.
pub struct WebViewHost {
    /// Event sink. Handlers push here; the main event loop drains.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewHost {
    /// Create a new host with an empty event sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    /// Create the webview as a child of `window`, covering a client area
    /// of the given physical size.
    ///
    /// No IPC bridge, no initialization script, and no custom protocol are
    /// attached: the loaded page runs isolated from the launcher process,
    /// like any ordinary remote page.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        width: u32,
        height: u32,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(full_window_bounds(width, height))
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(true);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = self.attach_page_load_handler(builder);
        builder = self.attach_title_handler(builder);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "webview created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
            current_title: String::new(),
        })
    }

    fn attach_page_load_handler<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let events = Arc::clone(&self.events);
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    fn attach_title_handler<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let events = Arc::clone(&self.events);
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { title });
            }
        })
    }
}

impl Default for WebViewHost {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_events_is_empty_initially() {
        let host = WebViewHost::new();
        assert!(host.drain_events().is_empty());
    }

    #[test]
    fn drain_events_takes_pending_events() {
        let host = WebViewHost::new();
        host.events
            .lock()
            .unwrap()
            .push(WebViewEvent::TitleChanged {
                title: "Music Explorer".into(),
            });

        let drained = host.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(
            host.drain_events().is_empty(),
            "drain should leave the sink empty"
        );
    }
}

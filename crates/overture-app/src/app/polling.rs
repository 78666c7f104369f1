//! Poll loop: forward server output to the log sink and drain webview events.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use overture_server::StreamKind;
use overture_webview::WebViewEvent;

use super::core::LauncherApp;

/// How often to poll for server output and webview events.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl LauncherApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_server_output();
            self.poll_webview_events();
        }

        if self.server.is_some() || self.webview.is_some() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
        } else {
            // Nothing left to poll (macOS residency after close)
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }

    /// Forward server output chunks to the log sink, verbatim and in
    /// arrival order. stdout maps to `info`, stderr to `warn`, under
    /// distinct targets so the streams stay filterable.
    fn poll_server_output(&mut self) {
        let Some(ref mut server) = self.server else {
            return;
        };

        for chunk in server.drain_output() {
            let text = String::from_utf8_lossy(&chunk.bytes);
            match chunk.stream {
                StreamKind::Stdout => {
                    tracing::info!(target: "overture::server::stdout", "{text}");
                }
                StreamKind::Stderr => {
                    tracing::warn!(target: "overture::server::stderr", "{text}");
                }
            }
        }
    }

    /// Drain webview events: log page loads, follow document titles.
    fn poll_webview_events(&mut self) {
        for event in self.webview_host.drain_events() {
            match event {
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Page load");
                }
                WebViewEvent::TitleChanged { title } => {
                    self.apply_document_title(title);
                }
            }
        }
    }

    /// Follow the page-reported document title, if enabled. Empty titles
    /// leave the current title in place.
    fn apply_document_title(&mut self, title: String) {
        if !self.config.window.dynamic_title || title.is_empty() {
            return;
        }

        let Some(ref mut webview) = self.webview else {
            return;
        };
        if webview.current_title() == title {
            return;
        }
        webview.set_title(title.clone());

        if let Some(ref window) = self.window {
            window.set_title(&title);
        }
    }
}

//! LauncherApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use overture_config::OvertureConfig;
use overture_server::ServerProcess;
use overture_webview::{WebViewHandle, WebViewHost};

/// Top-level application state.
///
/// Holds the two ownership slots of the launcher lifecycle: the spawned
/// server process and the native window with its webview. Each slot is
/// cleared exactly once on the corresponding teardown event.
pub struct LauncherApp {
    pub(super) config: OvertureConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webview_host: WebViewHost,
    pub(super) webview: Option<WebViewHandle>,

    // Visualization server process
    pub(super) server: Option<ServerProcess>,

    // Set once the window has been closed; the window is never recreated.
    pub(super) window_closed: bool,

    pub(super) last_poll: Instant,
}

impl LauncherApp {
    pub fn new(config: OvertureConfig) -> Self {
        Self {
            config,
            window: None,
            webview_host: WebViewHost::new(),
            webview: None,
            server: None,
            window_closed: false,
            last_poll: Instant::now(),
        }
    }
}

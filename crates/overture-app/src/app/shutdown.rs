//! Teardown: window close, server termination, app exit policy.

use winit::event_loop::ActiveEventLoop;

use super::core::LauncherApp;

// =============================================================================
// EXIT POLICY
// =============================================================================

/// Whether closing the last window exits the process.
///
/// On macOS the app stays resident with zero windows, per the platform
/// convention. Everywhere else it exits.
pub(super) fn quits_on_last_window_closed() -> bool {
    !cfg!(target_os = "macos")
}

// =============================================================================
// SHUTDOWN
// =============================================================================

impl LauncherApp {
    /// Handle the window being closed.
    ///
    /// Order matters:
    /// 1. Drop the webview, then the window it was attached to
    /// 2. Send the server its one termination signal
    /// 3. Exit, unless the platform keeps the app resident
    pub(super) fn on_window_closed(&mut self, event_loop: &ActiveEventLoop) {
        self.webview = None;
        self.window = None;
        self.window_closed = true;

        self.release_server();

        if quits_on_last_window_closed() {
            tracing::info!("All windows closed, exiting");
            event_loop.exit();
        } else {
            tracing::info!("All windows closed, staying resident");
        }
    }

    /// Send the server its single termination signal and clear the slot.
    ///
    /// Returns `true` if a signal was sent. Idempotent: with no server
    /// held, nothing happens.
    pub(super) fn release_server(&mut self) -> bool {
        let Some(mut server) = self.server.take() else {
            return false;
        };

        let pid = server.id();
        let sent = server.kill();
        tracing::info!(pid, "Sent termination signal to server");
        sent
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::quits_on_last_window_closed;
    use crate::app::core::LauncherApp;
    use overture_config::OvertureConfig;

    #[test]
    fn release_without_server_is_a_no_op() {
        let mut app = LauncherApp::new(OvertureConfig::default());
        assert!(!app.release_server());
        assert!(!app.release_server()); // second call must not panic
    }

    #[test]
    #[cfg(unix)]
    fn release_kills_spawned_server_once() {
        use overture_server::{LaunchSpec, ServerProcess};

        let mut app = LauncherApp::new(OvertureConfig::default());
        let spec = LaunchSpec {
            command_line: "sleep 30".into(),
            working_dir: std::env::temp_dir(),
        };
        app.server = Some(ServerProcess::spawn(&spec).expect("spawn sleep"));

        assert!(app.release_server(), "first release should send the signal");
        assert!(app.server.is_none(), "slot should be cleared");
        assert!(!app.release_server(), "second release has nothing to do");
    }

    #[test]
    fn exit_policy_matches_platform() {
        #[cfg(target_os = "macos")]
        assert!(!quits_on_last_window_closed());
        #[cfg(not(target_os = "macos"))]
        assert!(quits_on_last_window_closed());
    }
}

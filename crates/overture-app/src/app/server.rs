//! Server process launch: resolve the launch spec and spawn through the shell.

use overture_server::{LaunchSpec, ServerProcess};

use super::core::LauncherApp;

impl LauncherApp {
    /// Spawn the visualization server.
    ///
    /// A failed spawn is logged and swallowed: the window still opens, and
    /// whatever the shell reported lands on the log sink.
    pub(super) fn launch_server(&mut self) {
        let spec = match self.resolve_launch_spec() {
            Ok(spec) => spec,
            Err(e) => {
                tracing::error!("Cannot resolve server launch: {e}");
                return;
            }
        };

        tracing::info!(
            command = %spec.command_line,
            working_dir = %spec.working_dir.display(),
            "Starting visualization server"
        );

        match ServerProcess::spawn(&spec) {
            Ok(server) => {
                tracing::info!(pid = server.id(), "Server process started");
                self.server = Some(server);
            }
            Err(e) => {
                tracing::error!("Failed to start server: {e}");
            }
        }
    }

    /// Build the launch spec from config, falling back to the platform
    /// default working directory (parent of the launcher's own directory).
    fn resolve_launch_spec(&self) -> Result<LaunchSpec, overture_platform::PlatformError> {
        let working_dir = match &self.config.server.working_dir {
            Some(dir) => dir.clone(),
            None => overture_platform::default_working_dir()?,
        };

        Ok(LaunchSpec {
            command_line: self.config.server.command.clone(),
            working_dir,
        })
    }
}

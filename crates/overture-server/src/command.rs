//! Shell interpretation of the configured server command line.

use std::path::Path;
use std::process::Command;

// =============================================================================
// SHELL DETECTION
// =============================================================================

/// Get the platform shell used to interpret the command line.
///
/// - Unix: `/bin/sh`
/// - Windows: reads `$COMSPEC`, falls back to `cmd.exe`
pub fn shell_program() -> String {
    #[cfg(unix)]
    {
        "/bin/sh".to_string()
    }
    #[cfg(windows)]
    {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    }
}

// =============================================================================
// COMMAND CONSTRUCTION
// =============================================================================

/// Build a command that runs `command_line` through the platform shell.
///
/// Equivalent to `sh -c` on Unix and `cmd /C` on Windows, so the configured
/// command line may use the usual shell syntax (arguments, quoting, pipes).
pub fn shell_command(command_line: &str, working_dir: &Path) -> Command {
    let mut cmd = Command::new(shell_program());

    #[cfg(unix)]
    {
        cmd.arg("-c").arg(command_line);
    }
    #[cfg(windows)]
    {
        cmd.arg("/C").arg(command_line);
    }

    cmd.current_dir(working_dir);
    cmd
}

// =============================================================================
// TESTS
// =============================================================================

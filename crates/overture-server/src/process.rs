//! Visualization server subprocess supervision.
//!
//! Provides [`ServerProcess`] for spawning the configured command through
//! the platform shell, draining its output streams, and terminating it.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::command::shell_command;

// -----------------------------------------------------------------------------
// Error
// -----------------------------------------------------------------------------

/// Errors originating from server process operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to spawn server: {0}")]
    SpawnFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// -----------------------------------------------------------------------------
// Types
// -----------------------------------------------------------------------------

/// Which output stream a chunk arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// A chunk of raw output read from the server process.
#[derive(Debug, Clone)]
pub struct OutputChunk {
    pub stream: StreamKind,
    pub bytes: Vec<u8>,
}

/// What to launch: the shell command line and the directory to run it in.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub command_line: String,
    pub working_dir: PathBuf,
}

/// Size of each read from the child's output pipes.
const READ_CHUNK: usize = 8192;

// -----------------------------------------------------------------------------
// ServerProcess
// -----------------------------------------------------------------------------

/// Owns the spawned visualization server process.
///
/// Output from both stdio streams is read on background threads and
/// buffered in a channel, so [`ServerProcess::drain_output`] never blocks.
/// The streams share one channel; chunks come out in arrival order.
pub struct ServerProcess {
    child: Child,
    output_rx: mpsc::Receiver<OutputChunk>,
    /// Set once [`ServerProcess::kill`] has sent its signal. At most one
    /// signal is ever sent, counting the one from [`Drop`].
    killed: bool,
}

impl ServerProcess {
    /// Spawn the server through the platform shell.
    ///
    /// Returns as soon as the shell process exists; the server inside it
    /// may still be starting up. An `Err` here means the shell itself could
    /// not start (e.g. the working directory does not exist). A missing
    /// server executable is not an `Err`: the shell reports it as stderr
    /// text instead.
    ///
    /// An `Err` never leaves the process running: if a reader thread cannot
    /// be started after the spawn, the child is killed before returning.
    pub fn spawn(spec: &LaunchSpec) -> Result<Self, ServerError> {
        let mut cmd = shell_command(&spec.command_line, &spec.working_dir);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| ServerError::SpawnFailed(format!("{}: {e}", spec.command_line)))?;

        let (tx, rx) = mpsc::channel();

        if let Some(stdout) = child.stdout.take() {
            if let Err(e) = spawn_reader("server-stdout", StreamKind::Stdout, stdout, tx.clone()) {
                let _ = child.kill();
                return Err(e);
            }
        }
        if let Some(stderr) = child.stderr.take() {
            if let Err(e) = spawn_reader("server-stderr", StreamKind::Stderr, stderr, tx) {
                let _ = child.kill();
                return Err(e);
            }
        }

        Ok(ServerProcess {
            child,
            output_rx: rx,
            killed: false,
        })
    }

    /// OS process id of the spawned shell.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Drain all output chunks received since the last call (non-blocking).
    pub fn drain_output(&mut self) -> Vec<OutputChunk> {
        let mut chunks = Vec::new();
        while let Ok(chunk) = self.output_rx.try_recv() {
            chunks.push(chunk);
        }
        chunks
    }

    /// Returns `true` if the process is still running.
    pub fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Send one termination signal to the process (best-effort).
    ///
    /// Returns `true` if this call sent the signal. Subsequent calls are
    /// no-ops; nothing verifies that the process actually exited.
    pub fn kill(&mut self) -> bool {
        if self.killed {
            return false;
        }
        self.killed = true;
        let _ = self.child.kill();
        true
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        // Send the signal only if kill() never did, so the server does not
        // outlive the launcher. The error is ignored; the process may have
        // already exited.
        if !self.killed {
            let _ = self.child.kill();
        }
    }
}

/// Spawn a named background thread that reads one output pipe into `tx`.
fn spawn_reader<R>(
    name: &str,
    stream: StreamKind,
    mut reader: R,
    tx: mpsc::Sender<OutputChunk>,
) -> Result<(), ServerError>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let mut buf = [0u8; READ_CHUNK];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) => break, // EOF, server exited or closed the stream
                    Ok(n) => {
                        let chunk = OutputChunk {
                            stream,
                            bytes: buf[..n].to_vec(),
                        };
                        if tx.send(chunk).is_err() {
                            break; // Receiver dropped
                        }
                    }
                    Err(e) => {
                        tracing::debug!("{stream:?} reader error: {e}");
                        break;
                    }
                }
            }
        })
        .map_err(|e| ServerError::SpawnFailed(format!("failed to spawn reader thread: {e}")))?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    /// Drain chunks of the given stream into a string until `want` shows up
    /// or the deadline passes.
    #[cfg(unix)]
    fn collect_output(server: &mut ServerProcess, want: &str, stream: StreamKind) -> String {
        let mut output = String::new();
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            for chunk in server.drain_output() {
                if chunk.stream == stream {
                    output.push_str(&String::from_utf8_lossy(&chunk.bytes));
                }
            }
            if output.contains(want) {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        output
    }

    #[test]
    #[cfg(unix)]
    fn spawn_and_read_stdout() {
        let spec = LaunchSpec {
            command_line: "echo hello".into(),
            working_dir: std::env::temp_dir(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("spawn echo");
        let output = collect_output(&mut server, "hello", StreamKind::Stdout);
        assert!(
            output.contains("hello"),
            "expected 'hello' on stdout, got: {output:?}"
        );
    }

    #[test]
    #[cfg(unix)]
    fn stdout_chunks_arrive_in_emission_order() {
        // The sleeps force each echo into its own pipe read, so the chunks
        // travel the channel as separate messages.
        let spec = LaunchSpec {
            command_line: "for i in 1 2 3 4 5; do echo chunk$i; sleep 0.05; done".into(),
            working_dir: std::env::temp_dir(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("spawn loop");
        let output = collect_output(&mut server, "chunk5", StreamKind::Stdout);

        let mut last = 0;
        for i in 1..=5 {
            let pos = output
                .find(&format!("chunk{i}"))
                .unwrap_or_else(|| panic!("chunk{i} missing from output: {output:?}"));
            assert!(
                pos >= last,
                "chunk{i} at byte {pos} arrived before the previous chunk at {last}: {output:?}"
            );
            last = pos;
        }
    }

    #[test]
    #[cfg(unix)]
    fn stderr_is_tagged_separately() {
        let spec = LaunchSpec {
            command_line: "echo oops 1>&2".into(),
            working_dir: std::env::temp_dir(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("spawn");
        let output = collect_output(&mut server, "oops", StreamKind::Stderr);
        assert!(
            output.contains("oops"),
            "expected 'oops' on stderr, got: {output:?}"
        );
    }

    #[test]
    #[cfg(unix)]
    fn working_dir_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        // canonicalize so the comparison survives /tmp symlinks (macOS)
        let canonical = dir.path().canonicalize().unwrap();
        let spec = LaunchSpec {
            command_line: "pwd".into(),
            working_dir: canonical.clone(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("spawn pwd");
        let want = canonical.to_string_lossy().to_string();
        let output = collect_output(&mut server, &want, StreamKind::Stdout);
        assert!(
            output.contains(&want),
            "expected {want:?} in pwd output, got: {output:?}"
        );
    }

    #[test]
    #[cfg(unix)]
    fn missing_command_reports_on_stderr() {
        // The shell spawns fine; the failed lookup arrives as stderr text.
        let spec = LaunchSpec {
            command_line: "definitely-not-a-real-command-overture".into(),
            working_dir: std::env::temp_dir(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("shell spawn should succeed");
        let output = collect_output(&mut server, "not found", StreamKind::Stderr);
        assert!(
            output.contains("not found"),
            "expected shell error on stderr, got: {output:?}"
        );
    }

    #[test]
    #[cfg(unix)]
    fn spawn_fails_for_missing_working_dir() {
        let spec = LaunchSpec {
            command_line: "echo hi".into(),
            working_dir: PathBuf::from("/nonexistent/overture/workdir"),
        };
        let result = ServerProcess::spawn(&spec);
        assert!(matches!(result, Err(ServerError::SpawnFailed(_))));
    }

    #[test]
    #[cfg(unix)]
    fn kill_sends_at_most_one_signal() {
        let spec = LaunchSpec {
            command_line: "sleep 30".into(),
            working_dir: std::env::temp_dir(),
        };
        let mut server = ServerProcess::spawn(&spec).expect("spawn sleep");
        assert!(server.is_alive());

        assert!(server.kill(), "first kill should send the signal");
        assert!(!server.kill(), "second kill should be a no-op");

        let deadline = Instant::now() + Duration::from_secs(5);
        while server.is_alive() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!server.is_alive(), "process should be gone after kill");
    }

    /// Process state letter from `/proc/<pid>/stat` (the field after the
    /// parenthesized command name).
    #[cfg(target_os = "linux")]
    fn proc_state(pid: u32) -> char {
        let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).unwrap_or_default();
        stat.rsplit_once(')')
            .map(|(_, rest)| rest.trim_start().chars().next().unwrap_or(' '))
            .unwrap_or(' ')
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn drop_signals_an_unkilled_server() {
        let spec = LaunchSpec {
            command_line: "sleep 30".into(),
            working_dir: std::env::temp_dir(),
        };
        let server = ServerProcess::spawn(&spec).expect("spawn sleep");
        let pid = server.id();
        drop(server);

        // The child is never reaped here, so a landed signal shows up as
        // zombie state in /proc.
        let deadline = Instant::now() + Duration::from_secs(5);
        while proc_state(pid) != 'Z' && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(proc_state(pid), 'Z', "dropped server should have been killed");
    }

    #[test]
    fn server_error_display() {
        let err = ServerError::SpawnFailed("boom".into());
        assert_eq!(err.to_string(), "failed to spawn server: boom");
    }
}

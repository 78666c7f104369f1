//! Visualization server process management.
//!
//! Spawns the configured server command through the platform shell, reads
//! its output streams on background threads, and terminates it when the
//! launcher shuts down.

pub mod command;
pub mod process;

pub use command::{shell_command, shell_program};
pub use process::{LaunchSpec, OutputChunk, ServerError, ServerProcess, StreamKind};

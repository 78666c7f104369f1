//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the server process, and the webview
//! window.

mod core;
mod event_handler;
mod init;
mod polling;
mod server;
mod shutdown;

pub use core::LauncherApp;

//! Configuration schema types for Overture.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the shipped launcher.

mod server;
mod webview;
mod window;

pub use server::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Overture.
///
/// All options have defaults matching the shipped launcher behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OvertureConfig {
    pub window: WindowConfig,
    pub server: ServerConfig,
    pub webview: WebViewConfig,
}

// =============================================================================
// Tests
// =============================================================================

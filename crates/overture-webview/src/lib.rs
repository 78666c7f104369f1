//! WebView shell for the launcher window.
//!
//! Wraps the `wry` crate to provide:
//! - A single child WebView covering the launcher window
//! - Page-load and title-change event collection
//! - Resize-to-window bounds syncing
//!
//! No IPC bridge and no custom protocol are attached: the loaded page
//! stays isolated from the launcher process.

pub mod events;
pub mod handle;
pub mod host;
pub mod types;

pub use events::{PageLoadState, WebViewEvent};
pub use handle::WebViewHandle;
pub use host::WebViewHost;
pub use types::WebViewConfig;

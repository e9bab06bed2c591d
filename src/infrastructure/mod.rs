//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory mock)
//! - `markdown` - Markdown renderer backed by `pulldown-cmark`
//! - `watch_set` - Directory registrations with the OS notifier

pub mod fs;
pub mod markdown;
pub mod watch_set;

// Re-export for convenience
pub use fs::LocalFs;
pub use markdown::MarkdownRenderer;
pub use watch_set::{WatchChannels, WatchSet};

//! Pagewright - a minimal static site builder
//!
//! Pagewright renders every Markdown document under a source tree into a
//! single HTML template and writes the results, flat, into an output tree.
//! In run mode it keeps watching the source tree and rebuilds documents as
//! they change.
//!
//! ## Layers
//!
//! - `domain` - Path classification, output naming, template composition, ports
//! - `infrastructure` - Local filesystem, Markdown renderer, notifier registrations
//! - `application` - Publish and watch use cases
//! - `config` - `pagewright.toml` and environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    BuildSummary, CleanResult, PublishOptions, Published, Publisher, WatchEvent, WatchOptions,
    WatchUseCase,
};
pub use config::Config;
pub use domain::{Normalizer, PathClassifier, Template};
pub use error::{PagewrightError, PagewrightResult};
pub use infrastructure::{LocalFs, MarkdownRenderer};

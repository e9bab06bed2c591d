//! Configuration module for Pagewright
//!
//! Configuration hierarchy:
//! 1. Environment variables (PAGEWRIGHT_*)
//! 2. Project config (`pagewright.toml` in the working directory)
//! 3. Built-in defaults (lowest priority)
//!
//! The site layout is deliberately not configurable from the command line.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{apply_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ColorMode, Config, LoggingConfig, OutputConfig, SiteConfig};

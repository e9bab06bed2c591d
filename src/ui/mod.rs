//! Terminal presentation for the CLI
//!
//! Everything written to stdout/stderr for humans goes through here.
//! NDJSON output reuses `WatchEvent::to_json`.

pub mod context;
pub mod error;
pub mod icon;
pub mod terminal;
pub mod theme;
pub mod views;

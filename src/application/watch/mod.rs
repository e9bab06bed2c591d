//! Watch Use Case
//!
//! Builds the whole site and, in run mode, keeps it in sync with the source
//! tree. It orchestrates:
//! - The initial walk (directory registration + one publish per document)
//! - A single worker draining notifier events and errors
//! - Adoption of directories created while watching
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main orchestrator
//! - `WatchState` - Coordinator lifecycle
//! - `WatchEvent` - Events emitted during the build and the watch loop
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(publisher, WatchOptions::from_site(&site));
//! use_case.run(shutdown_rx, |event| println!("{}", event.to_json()))?;
//! ```

mod event;
mod use_case;


pub use event::{BuildSummary, WatchEvent, WatchOptions, WatchState};
pub use use_case::WatchUseCase;

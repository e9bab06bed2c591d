//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (classifier, normalizer, template, ports)
//! - Does NOT contain page-building rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Publisher` - Render one document into the template, clean the output tree
//! - `WatchUseCase` - Initial walk, directory registration and the rebuild loop

pub mod publish;
pub mod watch;

pub use publish::{CleanResult, PublishOptions, Published, Publisher};
pub use watch::{BuildSummary, WatchEvent, WatchOptions, WatchUseCase};

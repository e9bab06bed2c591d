//! Publish Use Case
//!
//! Turns one source document into one output artifact:
//! - Read the template fresh from disk
//! - Read and render the source document
//! - Compose rendered content into the template
//! - Write the artifact to its normalized output path
//!
//! Also provides the coarse clean of the output tree.

mod result;
mod use_case;

#[cfg(test)]
mod tests;

pub use result::{CleanResult, Published};
pub use use_case::{PublishOptions, Publisher};

//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod document_renderer;
pub mod file_system;

pub use document_renderer::DocumentRenderer;
pub use file_system::FileSystem;

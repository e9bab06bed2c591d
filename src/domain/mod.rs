//! Domain Layer
//!
//! Pure page-building rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `classifier` - Which paths are source documents
//! - `normalizer` - Source path to output path mapping
//! - `template` - Marker-based template composition
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Rules are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod classifier;
pub mod normalizer;
pub mod ports;
pub mod template;

pub use classifier::PathClassifier;
pub use normalizer::Normalizer;
pub use template::{compose, Template};

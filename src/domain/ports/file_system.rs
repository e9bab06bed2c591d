//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the publisher read sources and write artifacts without
//! depending on a concrete implementation (local disk or in-memory mock).

use std::path::{Path, PathBuf};

use crate::error::PagewrightResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` - in-memory for testing
pub trait FileSystem {
    /// Read a file's raw bytes
    fn read(&self, path: &Path) -> PagewrightResult<Vec<u8>>;

    /// Create or overwrite a file, creating parent directories as needed
    fn write(&self, path: &Path, content: &[u8]) -> PagewrightResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> PagewrightResult<()>;

    /// All files below `root`, recursively, in a stable order
    ///
    /// A missing `root` yields an empty list.
    fn list_files(&self, root: &Path) -> PagewrightResult<Vec<PathBuf>>;
}

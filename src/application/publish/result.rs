//! Publish result types

use std::path::PathBuf;

/// One artifact written by the publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Source document that was rendered
    pub source: PathBuf,
    /// Artifact that was written
    pub output: PathBuf,
    /// Size of the artifact in bytes
    pub bytes: usize,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Files that were deleted
    pub deleted: Vec<PathBuf>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deleted files
    pub fn count(&self) -> usize {
        self.deleted.len()
    }

    /// True when nothing was deleted
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}

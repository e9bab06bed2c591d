//! Source document classification

use std::path::Path;

/// Default extension of source documents
pub const DEFAULT_SOURCE_EXTENSION: &str = "md";

/// Decides whether a path names a source document, by extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathClassifier {
    extension: String,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_EXTENSION)
    }
}

impl PathClassifier {
    /// Create a classifier for the given extension (without the leading dot)
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// The extension this classifier accepts
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// True iff the text after the last `.` of the final component matches
    /// exactly
    pub fn is_source_document(&self, path: &Path) -> bool {
        final_extension(path).is_some_and(|ext| ext == self.extension)
    }
}

/// Text after the last `.` of the final component
///
/// Unlike `Path::extension`, a leading dot counts: `.md` has extension `md`.
pub fn final_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rsplit_once('.').map(|(_, ext)| ext.to_string())
}

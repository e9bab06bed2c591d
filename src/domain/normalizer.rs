//! Output path normalization
//!
//! Output artifacts live flat under the output directory, named after the
//! source file: `pages/sub/My Cool File.md` becomes `out/my-cool-file.html`.

use std::path::{Path, PathBuf};

use crate::domain::classifier::final_extension;
use crate::error::{PagewrightError, PagewrightResult};

/// Default extension of output artifacts
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

/// Maps source document paths to output artifact paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    output_dir: PathBuf,
    extension: String,
}

impl Normalizer {
    /// Create a normalizer writing into `output_dir` with the given extension
    pub fn new(output_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    /// Output directory artifacts are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Extension of output artifacts
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Derive the output path for a source document
    ///
    /// The stem is everything before the last `.` of the file name, so
    /// `pages/.md` becomes `out/.html`.
    pub fn to_output_path(&self, source: &Path) -> PagewrightResult<PathBuf> {
        let name = source
            .file_name()
            .map(|s| s.to_string_lossy())
            .ok_or_else(|| PagewrightError::InvalidSourcePath {
                path: source.to_path_buf(),
            })?;
        let stem = name.rsplit_once('.').map_or(name.as_ref(), |(stem, _)| stem);

        let file_name = format!("{}.{}", normalize_stem(stem), self.extension);
        Ok(self.output_dir.join(file_name))
    }

    /// Whether `path` carries the output extension, by the same rule the
    /// classifier applies to sources
    pub fn is_output_artifact(&self, path: &Path) -> bool {
        final_extension(path).is_some_and(|ext| ext == self.extension)
    }
}

/// Lowercase and replace every space with a hyphen
pub fn normalize_stem(stem: &str) -> String {
    stem.to_lowercase().replace(' ', "-")
}

//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::FileSystem;
use crate::error::{PagewrightError, PagewrightResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> PagewrightResult<Vec<u8>> {
        std::fs::read(path).map_err(|source| PagewrightError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> PagewrightResult<()> {
        let write_err = |source| PagewrightError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        // Plain create/truncate so the file gets the usual 0644-style mode
        std::fs::write(path, content).map_err(write_err)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> PagewrightResult<()> {
        std::fs::remove_file(path).map_err(|source| PagewrightError::Remove {
            path: path.to_path_buf(),
            source,
        })
    }

    fn list_files(&self, root: &Path) -> PagewrightResult<Vec<PathBuf>> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = entry.map_err(|source| PagewrightError::Walk {
                path: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

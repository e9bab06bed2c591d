//! In-memory file system for testing
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSystem;
use crate::error::{PagewrightError, PagewrightResult};

#[derive(Clone, Default)]
pub struct MockFs {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    pub writes: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.as_ref().to_vec());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "File not found")
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> PagewrightResult<Vec<u8>> {
        self.contents(path).ok_or_else(|| PagewrightError::Read {
            path: path.to_path_buf(),
            source: not_found(),
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> PagewrightResult<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn remove(&self, path: &Path) -> PagewrightResult<()> {
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| PagewrightError::Remove {
                path: path.to_path_buf(),
                source: not_found(),
            })
    }

    fn list_files(&self, root: &Path) -> PagewrightResult<Vec<PathBuf>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect())
    }
}

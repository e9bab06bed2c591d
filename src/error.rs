//! Error types for Pagewright
//!
//! Library code returns `PagewrightResult`; the binary converts into
//! `anyhow::Error` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pagewright operations
pub type PagewrightResult<T> = Result<T, PagewrightError>;

/// Main error type for Pagewright operations
#[derive(Error, Debug)]
pub enum PagewrightError {
    /// Template does not contain the substitution marker
    #[error("can't find \"{marker}\" marker in template {}", template.display())]
    MissingMarker { marker: String, template: PathBuf },

    /// Path has no usable file name to derive an output name from
    #[error("not a source document path: {}", path.display())]
    InvalidSourcePath { path: PathBuf },

    /// Source root does not exist
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Reading a file failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a file failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing a file failed
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Notifier could not be created
    #[error("failed to start file watcher: {0}")]
    WatcherInit(#[source] notify::Error),

    /// Directory could not be registered with the notifier
    #[error("failed to watch {}: {source}", path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Worker thread panicked
    #[error("watch worker terminated unexpectedly")]
    WorkerPanicked,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PagewrightError {
    /// File the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PagewrightError::MissingMarker { template, .. } => Some(template),
            PagewrightError::InvalidSourcePath { path }
            | PagewrightError::DirectoryNotFound { path }
            | PagewrightError::Read { path, .. }
            | PagewrightError::Write { path, .. }
            | PagewrightError::Remove { path, .. }
            | PagewrightError::Walk { path, .. }
            | PagewrightError::Watch { path, .. } => Some(path),
            PagewrightError::InvalidConfig { file, .. } => Some(file),
            PagewrightError::WatcherInit(_)
            | PagewrightError::WorkerPanicked
            | PagewrightError::Io(_) => None,
        }
    }
}

//! Directory registrations with the OS change notifier
//!
//! Every directory is registered non-recursively; recursion comes from the
//! caller walking the tree. The notifier handler splits what it receives into
//! an event channel and an error channel.
//!
//! Directories are keyed by absolute path, the form the notifier reports.
//! The set only grows while a run lasts.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crossbeam_channel::{unbounded, Receiver};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{PagewrightError, PagewrightResult};

/// Receiving side of the notifier
#[derive(Debug)]
pub struct WatchChannels {
    /// Filesystem change events
    pub events: Receiver<Event>,
    /// Notifier delivery errors
    pub errors: Receiver<notify::Error>,
}

/// The set of directories registered for change notification
///
/// Owns the notifier; dropping the set releases every registration and
/// disconnects both channels.
pub struct WatchSet {
    watcher: RecommendedWatcher,
    directories: BTreeSet<PathBuf>,
}

impl std::fmt::Debug for WatchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSet")
            .field("directories", &self.directories)
            .finish_non_exhaustive()
    }
}

impl WatchSet {
    /// Create an empty set and the channels its notifications arrive on
    pub fn new() -> PagewrightResult<(Self, WatchChannels)> {
        let (event_tx, events) = unbounded();
        let (error_tx, errors) = unbounded();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                // Receivers only go away during shutdown
                let _ = match res {
                    Ok(event) => event_tx.send(event).map_err(drop),
                    Err(err) => error_tx.send(err).map_err(drop),
                };
            },
            Config::default(),
        )
        .map_err(PagewrightError::WatcherInit)?;

        Ok((
            Self {
                watcher,
                directories: BTreeSet::new(),
            },
            WatchChannels { events, errors },
        ))
    }

    /// Register a single directory
    ///
    /// Returns `false` if it was already registered.
    pub fn register(&mut self, dir: &Path) -> PagewrightResult<bool> {
        let key = absolute(dir)?;
        if self.directories.contains(&key) {
            return Ok(false);
        }

        self.watch(&key, dir)?;
        tracing::debug!("[watch] registered {}", key.display());
        self.directories.insert(key);
        Ok(true)
    }

    /// Register `dir` even if it is already known
    ///
    /// A directory that was deleted and created again under the same name
    /// needs a fresh registration. Returns `true` if `dir` was not known.
    pub fn refresh(&mut self, dir: &Path) -> PagewrightResult<bool> {
        let key = absolute(dir)?;
        self.watch(&key, dir)?;
        tracing::debug!("[watch] refreshed {}", key.display());
        Ok(self.directories.insert(key))
    }

    fn watch(&mut self, key: &Path, dir: &Path) -> PagewrightResult<()> {
        self.watcher
            .watch(key, RecursiveMode::NonRecursive)
            .map_err(|source| PagewrightError::Watch {
                path: dir.to_path_buf(),
                source,
            })
    }

    /// Whether `dir` is registered
    pub fn contains(&self, dir: &Path) -> bool {
        absolute(dir)
            .map(|key| self.directories.contains(&key))
            .unwrap_or(false)
    }

    /// Registered directories, sorted
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    /// Number of registered directories
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

fn absolute(path: &Path) -> PagewrightResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

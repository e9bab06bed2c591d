//! Watch event types and options

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::domain::PathClassifier;

/// Watch options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Root of the source tree
    pub source: PathBuf,
    /// Which files are source documents
    pub classifier: PathClassifier,
}

impl WatchOptions {
    /// Create watch options with the default classifier
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            classifier: PathClassifier::default(),
        }
    }

    /// Options for a configured site
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            source: site.pages.clone(),
            classifier: site.classifier(),
        }
    }

    /// Set the classifier
    pub fn with_classifier(mut self, classifier: PathClassifier) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Coordinator lifecycle
///
/// `Idle -> Initializing -> Watching <-> Reacting -> Terminated`.
/// Generate mode goes from `Initializing` straight to `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Initializing,
    Watching,
    Reacting,
    Terminated,
}

impl WatchState {
    /// Whether moving to `next` is a legal transition
    pub fn can_transition_to(self, next: WatchState) -> bool {
        use WatchState::*;
        matches!(
            (self, next),
            (Idle, Initializing)
                | (Initializing, Watching)
                | (Initializing, Terminated)
                | (Watching, Reacting)
                | (Reacting, Watching)
                | (Watching, Terminated)
                | (Reacting, Terminated)
        )
    }
}

impl fmt::Display for WatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WatchState::Idle => "idle",
            WatchState::Initializing => "initializing",
            WatchState::Watching => "watching",
            WatchState::Reacting => "reacting",
            WatchState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Outcome of an initial build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Documents published
    pub published: usize,
    /// Directories registered with the notifier (run mode only)
    pub directories: usize,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Initial build started
    BuildStarted { source: String },
    /// A directory was registered with the notifier
    DirectoryRegistered { path: String },
    /// A directory appeared while watching and is being adopted
    DirectoryAdded { path: String },
    /// About to rebuild a document
    Updating { path: String },
    /// A document was rebuilt
    Published { source: String, output: String },
    /// Initial build finished
    BuildComplete { published: usize },
    /// Watch loop started
    WatchStarted { source: String, directories: usize },
    /// Output tree cleaned
    CleanComplete { deleted: Vec<String> },
    /// Non-fatal error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

/// Path as carried in an event
pub(super) fn display(path: &Path) -> String {
    path.display().to_string()
}

impl WatchEvent {
    /// Convert to JSON string with a "command" field naming the source of the event
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

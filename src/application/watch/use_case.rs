//! Watch use case implementation

use std::path::Path;

use crossbeam_channel::{select, Receiver};
use ignore::WalkBuilder;
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};

use crate::application::publish::Publisher;
use crate::domain::ports::{DocumentRenderer, FileSystem};
use crate::error::{PagewrightError, PagewrightResult};
use crate::infrastructure::{WatchChannels, WatchSet};

use super::event::{display, BuildSummary, WatchEvent, WatchOptions, WatchState};

/// Watch use case
///
/// Walks the source tree, publishes every document and, in run mode, rebuilds
/// documents as the notifier reports changes. All publishes are sequential.
pub struct WatchUseCase<FS, R>
where
    FS: FileSystem,
    R: DocumentRenderer,
{
    publisher: Publisher<FS, R>,
    options: WatchOptions,
}

impl<FS, R> WatchUseCase<FS, R>
where
    FS: FileSystem,
    R: DocumentRenderer,
{
    pub fn new(publisher: Publisher<FS, R>, options: WatchOptions) -> Self {
        Self { publisher, options }
    }

    pub fn publisher(&self) -> &Publisher<FS, R> {
        &self.publisher
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Publish every document once, without acquiring a notifier
    pub fn generate<F>(&self, on_event: F) -> PagewrightResult<BuildSummary>
    where
        F: Fn(WatchEvent),
    {
        let mut state = WatchState::Idle;
        transition(&mut state, WatchState::Initializing);

        let summary = self.initial_build(None, &on_event)?;

        transition(&mut state, WatchState::Terminated);
        Ok(summary)
    }

    /// Publish every document, then rebuild on change until `shutdown` fires
    ///
    /// Blocks until the worker exits. The notifier is released on every
    /// return path.
    pub fn run<F>(&self, shutdown: Receiver<()>, on_event: F) -> PagewrightResult<BuildSummary>
    where
        F: Fn(WatchEvent) + Sync,
        FS: Sync,
        R: Sync,
    {
        let mut state = WatchState::Idle;
        transition(&mut state, WatchState::Initializing);

        let (mut set, channels) = WatchSet::new()?;
        let summary = self.initial_build(Some(&mut set), &on_event)?;

        on_event(WatchEvent::WatchStarted {
            source: display(&self.options.source),
            directories: set.len(),
        });
        transition(&mut state, WatchState::Watching);

        std::thread::scope(|scope| {
            let worker = scope.spawn(|| self.drain(set, channels, &shutdown, &on_event, state));
            match worker.join() {
                Ok(result) => result,
                Err(_) => Err(PagewrightError::WorkerPanicked),
            }
        })?;

        Ok(summary)
    }

    fn initial_build<F>(
        &self,
        set: Option<&mut WatchSet>,
        on_event: &F,
    ) -> PagewrightResult<BuildSummary>
    where
        F: Fn(WatchEvent),
    {
        let root = &self.options.source;
        if !root.is_dir() {
            return Err(PagewrightError::DirectoryNotFound { path: root.clone() });
        }

        on_event(WatchEvent::BuildStarted {
            source: display(root),
        });
        let summary = self.walk_tree(root, set, false, on_event)?;
        on_event(WatchEvent::BuildComplete {
            published: summary.published,
        });

        tracing::info!(
            "[build] {} document(s) from {}",
            summary.published,
            root.display()
        );
        Ok(summary)
    }

    /// Register every directory below `root` (when a set is given) and
    /// publish every document, in file name order
    ///
    /// With `refresh`, known directories are registered again.
    fn walk_tree<F>(
        &self,
        root: &Path,
        mut set: Option<&mut WatchSet>,
        refresh: bool,
        on_event: &F,
    ) -> PagewrightResult<BuildSummary>
    where
        F: Fn(WatchEvent),
    {
        let mut summary = BuildSummary::default();

        for entry in WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
        {
            let entry = entry.map_err(|source| PagewrightError::Walk {
                path: root.to_path_buf(),
                source,
            })?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if file_type.is_dir() {
                if let Some(set) = set.as_deref_mut() {
                    let added = if refresh {
                        set.refresh(path)?
                    } else {
                        set.register(path)?
                    };
                    if added {
                        summary.directories += 1;
                        on_event(WatchEvent::DirectoryRegistered {
                            path: display(path),
                        });
                    }
                }
            } else if self.options.classifier.is_source_document(path) {
                self.rebuild(path, on_event)?;
                summary.published += 1;
            }
        }

        Ok(summary)
    }

    pub(super) fn drain<F>(
        &self,
        mut set: WatchSet,
        channels: WatchChannels,
        shutdown: &Receiver<()>,
        on_event: &F,
        mut state: WatchState,
    ) -> PagewrightResult<()>
    where
        F: Fn(WatchEvent),
    {
        loop {
            select! {
                recv(channels.events) -> msg => match msg {
                    Ok(event) => {
                        transition(&mut state, WatchState::Reacting);
                        self.react(&mut set, &event, on_event)?;
                        transition(&mut state, WatchState::Watching);
                    }
                    Err(_) => break,
                },
                recv(channels.errors) -> msg => match msg {
                    Ok(err) => {
                        tracing::warn!("[watch] notifier error: {}", err);
                        on_event(WatchEvent::Error {
                            message: err.to_string(),
                        });
                    }
                    Err(_) => break,
                },
                recv(shutdown) -> _ => break,
            }
        }

        drop(set);
        transition(&mut state, WatchState::Terminated);
        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn react<F>(&self, set: &mut WatchSet, event: &Event, on_event: &F) -> PagewrightResult<()>
    where
        F: Fn(WatchEvent),
    {
        if matches!(event.kind, EventKind::Access(_) | EventKind::Other) {
            return Ok(());
        }

        let created = matches!(event.kind, EventKind::Create(_));
        let vanishing = matches!(
            event.kind,
            EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From))
        );

        for path in &event.paths {
            if path.is_dir() {
                if created || !set.contains(path) {
                    self.adopt(set, path, on_event)?;
                }
                continue;
            }

            if !self.options.classifier.is_source_document(path) {
                continue;
            }

            if vanishing || !self.publisher.source_exists(path) {
                tracing::debug!("[watch] {} is gone, skipping", path.display());
                continue;
            }

            self.rebuild(path, on_event)?;
        }

        Ok(())
    }

    /// Bring a directory that appeared while watching under watch
    ///
    /// Known directories below it are registered again, so a directory that
    /// was deleted and re-created keeps delivering events.
    fn adopt<F>(&self, set: &mut WatchSet, dir: &Path, on_event: &F) -> PagewrightResult<()>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::DirectoryAdded {
            path: display(dir),
        });
        let summary = self.walk_tree(dir, Some(set), true, on_event)?;
        tracing::info!(
            "[watch] adopted {}: {} director(ies), {} document(s)",
            dir.display(),
            summary.directories,
            summary.published
        );
        Ok(())
    }

    fn rebuild<F>(&self, source: &Path, on_event: &F) -> PagewrightResult<()>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::Updating {
            path: display(source),
        });
        let published = self.publisher.publish(source)?;
        on_event(WatchEvent::Published {
            source: display(&published.source),
            output: display(&published.output),
        });
        Ok(())
    }
}

fn transition(state: &mut WatchState, next: WatchState) {
    debug_assert!(state.can_transition_to(next), "{state} -> {next}");
    tracing::trace!("[watch] {} -> {}", state, next);
    *state = next;
}

//! Per-root orchestration: status scans, history lookup and content fetches

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::groups::ResourceGroups;
use super::scheduler::RefreshScheduler;
use crate::cvs::parser::Parser;
use crate::cvs::{
    CancelFlag, CommandRunner, CvsError, History, HistoryCache, HistoryResolver, RevisionContent,
    entries,
};
use crate::model::{FileStatus, Notification, RevisionRef, TrackedResource};

/// Result of one status scan
///
/// Replaced as a whole on every rescan. Per-file `cvs status` answers and
/// memoized histories live here, so a rescan drops them along with the
/// resources.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub resources: Vec<TrackedResource>,
    pub groups: ResourceGroups,
    sources: HashMap<PathBuf, TrackedResource>,
    history: HistoryCache,
}

impl Snapshot {
    fn new(root: &Path, resources: Vec<TrackedResource>) -> Self {
        let groups = ResourceGroups::from_resources(root, &resources);
        Self {
            resources,
            groups,
            sources: HashMap::new(),
            history: HistoryCache::new(),
        }
    }

    pub fn resource(&self, relative: &Path) -> Option<&TrackedResource> {
        self.resources.iter().find(|r| r.path == relative)
    }

    pub fn cached_histories(&self) -> usize {
        self.history.len()
    }
}

/// One cvs working copy
pub struct Workspace<R: CommandRunner> {
    root: PathBuf,
    runner: R,
    snapshot: Snapshot,
    scheduler: RefreshScheduler,
}

impl<R: CommandRunner> Workspace<R> {
    pub fn new(root: impl Into<PathBuf>, runner: R) -> Self {
        let root = root.into();
        Self {
            scheduler: RefreshScheduler::new(root.clone()),
            root,
            runner,
            snapshot: Snapshot::default(),
        }
    }

    pub fn with_scheduler(mut self, scheduler: RefreshScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn groups(&self) -> &ResourceGroups {
        &self.snapshot.groups
    }

    /// Run `cvs -n -q update` and replace the snapshot
    pub fn rescan(&mut self) -> Result<&Snapshot, CvsError> {
        let output = self.runner.update_preview_raw(&self.root)?;
        let resources = Parser::parse_update(&output);
        tracing::debug!(root = %self.root.display(), count = resources.len(), "status scan");
        self.snapshot = Snapshot::new(&self.root, resources);
        Ok(&self.snapshot)
    }

    /// Record a file-system change below the root
    pub fn notify(&mut self, path: impl Into<PathBuf>, now: Instant) {
        self.scheduler.notify(path, now);
    }

    /// Rescan if a scheduled refresh is due; returns whether one ran
    pub fn poll_refresh(&mut self, now: Instant) -> Result<bool, CvsError> {
        match self.scheduler.poll(now) {
            Some(request) => {
                tracing::debug!(trigger = %request.trigger.display(), "refresh due");
                self.rescan()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn next_refresh(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Status and revisions of one file, as `cvs status` reports them
    ///
    /// Files the last scan saw as untracked or added are answered from the
    /// snapshot without running cvs.
    pub fn source_file(&self, path: &Path) -> Result<TrackedResource, CvsError> {
        let relative = self.relative(path);
        if let Some(known) = self.snapshot.resource(&relative)
            && !known.status.has_history()
        {
            return Ok(known.clone());
        }

        let output = self.runner.status_raw(&self.absolute(path))?;
        let mut resource = Parser::parse_status(&output)
            .into_iter()
            .next()
            .unwrap_or_else(|| TrackedResource::new(relative.clone(), FileStatus::Unknown));
        resource.path = relative;
        Ok(resource)
    }

    /// Full branch-aware history of one file
    ///
    /// Never fails: cvs failures come back as warnings next to whatever
    /// history could be collected. Within one snapshot a repeat lookup runs
    /// no cvs command.
    pub fn history(&mut self, path: &Path) -> History {
        let relative = self.relative(path);
        let cached = self.snapshot.sources.get(&relative).cloned();
        let resource = match cached {
            Some(resource) => resource,
            None => match self.source_file(path) {
                Ok(resource) => {
                    self.snapshot.sources.insert(relative, resource.clone());
                    resource
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cvs status failed");
                    return History {
                        entries: Vec::new(),
                        warnings: vec![Notification::warning(format!(
                            "Failed to obtain cvs status for resource: {}",
                            display_name(path)
                        ))],
                    };
                }
            },
        };

        let absolute = self.absolute(path);
        let resolver = HistoryResolver::new(&self.runner);
        self.snapshot
            .history
            .get_or_resolve(&resolver, &absolute, &resource)
    }

    /// Content of a file at a revision, for one side of a diff
    pub fn revision_content(
        &self,
        path: &Path,
        revision: &RevisionRef,
        cancel: &CancelFlag,
    ) -> RevisionContent {
        RevisionContent::fetch(&self.runner, &self.absolute(path), revision, cancel)
    }

    /// Undo `cvs add` for a file that was never committed
    pub fn undo_add(&mut self, path: &Path) -> Result<(), CvsError> {
        let absolute = self.absolute(path);
        self.locked(|_| entries::undo_add(&absolute))
    }

    /// `cvs add` a file
    pub fn add(&mut self, path: &Path) -> Result<String, CvsError> {
        let absolute = self.absolute(path);
        self.locked(|runner| runner.add(&absolute))
    }

    /// Discard local modifications of a file
    pub fn revert(&mut self, path: &Path) -> Result<String, CvsError> {
        let absolute = self.absolute(path);
        self.locked(|runner| runner.revert(&absolute))
    }

    /// Commit one file
    pub fn commit_file(&mut self, path: &Path, message: &str) -> Result<String, CvsError> {
        let absolute = self.absolute(path);
        self.locked(|runner| runner.commit_file(&absolute, message))
    }

    /// Commit every staged and modified file of the last scan
    pub fn commit_all(&mut self, message: &str) -> Result<String, CvsError> {
        let files: Vec<String> = self
            .snapshot
            .groups
            .committable()
            .map(|r| r.path.to_string_lossy().into_owned())
            .collect();
        let files: Vec<&str> = files.iter().map(String::as_str).collect();
        let root = self.root.clone();
        self.locked(|runner| runner.commit(&root, &files, message))
    }

    /// Run a command that touches the working copy with refreshes held back,
    /// then schedule one refresh
    fn locked<T>(&mut self, op: impl FnOnce(&R) -> Result<T, CvsError>) -> Result<T, CvsError> {
        self.scheduler.lock();
        let result = op(&self.runner);
        self.scheduler.unlock(Instant::now());
        result
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        self.root.join(self.relative(path))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

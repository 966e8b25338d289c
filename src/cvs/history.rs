//! Branch-aware revision history
//!
//! `cvs log -r:<rev>` only lists the revisions on `<rev>`'s own line of
//! development. For a file checked out on a branch, the history continues on
//! the parent line from the branch point, so the walk fetches one log per
//! branch level until it reaches a trunk revision.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::constants::MAX_BRANCH_HOPS;
use super::executor::{CommandRunner, split_file};
use super::parser::Parser;
use crate::model::{CommitEntry, Notification, RevisionId, TrackedResource};

/// History of one file plus the warnings raised while collecting it
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Entries newest first: head marker (if any), then the checked-out
    /// line, then each parent line down to the trunk
    pub entries: Vec<CommitEntry>,

    pub warnings: Vec<Notification>,
}

impl History {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walks a file's branch ancestry, fetching one log per level
pub struct HistoryResolver<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    max_hops: usize,
}

impl<'a, R: CommandRunner + ?Sized> HistoryResolver<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self {
            runner,
            max_hops: MAX_BRANCH_HOPS,
        }
    }

    /// Override the number of log fetches allowed before giving up
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops.max(1);
        self
    }

    /// Collect the full history for `file`
    ///
    /// Untracked and added files have nothing in the repository yet and
    /// return immediately without running cvs.
    pub fn resolve(&self, file: &Path, resource: &TrackedResource) -> History {
        let mut history = History::default();

        if !resource.status.has_history() {
            return history;
        }
        let Some(start) = resource.repository_revision.clone() else {
            tracing::debug!(path = %file.display(), "no repository revision, no history");
            return history;
        };

        let working = resource.working_revision.as_ref();
        let mut revision = start;

        for hop in 1..=self.max_hops {
            tracing::debug!(path = %file.display(), %revision, hop, "fetching cvs log");

            let output = match self.runner.log_raw(file, &revision) {
                Ok(output) => output,
                Err(e) => {
                    tracing::warn!(path = %file.display(), error = %e, "cvs log failed");
                    history.warnings.push(Notification::warning(format!(
                        "Failed to obtain cvs log for resource: {}",
                        display_name(file)
                    )));
                    break;
                }
            };

            let parsed = Parser::parse_log(&output, working);

            if hop == 1 && !parsed.head.is_empty() && working != Some(&parsed.head) {
                history.entries.push(CommitEntry::head_marker(parsed.head));
            }
            history.entries.extend(parsed.entries);

            if revision.is_trunk_root() {
                break;
            }

            let Some(parent) = revision.branch_point() else {
                tracing::warn!(%revision, "revision has no branch point");
                history.warnings.push(Notification::warning(format!(
                    "Error getting cvs log. Malformed revision {} for {}",
                    revision,
                    display_name(file)
                )));
                break;
            };
            revision = parent;

            if hop == self.max_hops {
                tracing::warn!(path = %file.display(), hops = hop, "branch nesting too deep");
                history.warnings.push(Notification::warning(
                    "Error getting cvs log. Too many nested branches.",
                ));
            }
        }

        history
    }
}

fn display_name(file: &Path) -> String {
    split_file(file)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|_| file.display().to_string())
}

/// Memoized histories keyed by (path, repository revision)
///
/// Owned by one status snapshot; a rescan builds a new snapshot and with it
/// an empty cache.
#[derive(Debug, Default)]
pub struct HistoryCache {
    entries: HashMap<(PathBuf, RevisionId), Vec<CommitEntry>>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached history or resolve and remember it
    ///
    /// Warnings are only reported by the call that actually ran cvs.
    pub fn get_or_resolve<R: CommandRunner + ?Sized>(
        &mut self,
        resolver: &HistoryResolver<'_, R>,
        file: &Path,
        resource: &TrackedResource,
    ) -> History {
        if !resource.status.has_history() {
            return History::default();
        }
        let Some(revision) = resource.repository_revision.clone() else {
            return resolver.resolve(file, resource);
        };

        let key = (file.to_path_buf(), revision);
        if let Some(entries) = self.entries.get(&key) {
            return History {
                entries: entries.clone(),
                warnings: Vec::new(),
            };
        }

        let history = resolver.resolve(file, resource);
        self.entries.insert(key, history.entries.clone());
        history
    }
}

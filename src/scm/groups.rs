//! Resource groups shown by a source-control panel

use std::path::Path;

use crate::model::{CompareRequest, FileStatus, RevisionRef, TrackedResource};

/// Bucket a resource is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Scheduled additions and removals
    Staged,
    /// Local edits
    Changes,
    /// Needs conflict resolution or a merge
    Conflicts,
    /// Incoming changes from the repository
    Repository,
    Untracked,
}

impl GroupKind {
    /// Group a status belongs to, `None` for statuses that are not shown
    pub fn for_status(status: FileStatus) -> Option<Self> {
        match status {
            FileStatus::Added | FileStatus::Removed => Some(GroupKind::Staged),
            FileStatus::Modified | FileStatus::Deleted => Some(GroupKind::Changes),
            FileStatus::Conflict | FileStatus::Merge => Some(GroupKind::Conflicts),
            FileStatus::Patch
            | FileStatus::Checkout
            | FileStatus::RemovedFromRepo
            | FileStatus::Directory => Some(GroupKind::Repository),
            FileStatus::Untracked => Some(GroupKind::Untracked),
            FileStatus::UpToDate | FileStatus::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Staged => "Staged Changes",
            GroupKind::Changes => "Changes",
            GroupKind::Conflicts => "Unmerged Changes",
            GroupKind::Repository => "Repository Changes",
            GroupKind::Untracked => "Untracked",
        }
    }
}

/// One row of a resource group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    pub resource: TrackedResource,

    /// Context key the host uses to pick available actions
    pub context_value: &'static str,

    /// Diff opened when the row is selected
    pub command: Option<CompareRequest>,
}

impl ResourceState {
    fn new(root: &Path, resource: TrackedResource) -> Self {
        let context_value = match resource.status {
            FileStatus::Added => "undoable",
            FileStatus::Removed | FileStatus::Modified | FileStatus::Deleted => "revertable",
            FileStatus::Conflict | FileStatus::Merge => "conflicted",
            FileStatus::Untracked => "untracked",
            _ => "incoming",
        };
        let command = (resource.status == FileStatus::Modified).then(|| {
            CompareRequest::new(
                &root.join(&resource.path),
                RevisionRef::Head,
                RevisionRef::WorkingCopy,
            )
        });
        Self {
            resource,
            context_value,
            command,
        }
    }
}

/// All groups for one scan, rebuilt wholesale every refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceGroups {
    pub staged: Vec<ResourceState>,
    pub changes: Vec<ResourceState>,
    pub conflicts: Vec<ResourceState>,
    pub repository: Vec<ResourceState>,
    pub untracked: Vec<ResourceState>,
}

impl ResourceGroups {
    /// Distribute scanned resources into groups, keeping scan order
    pub fn from_resources(root: &Path, resources: &[TrackedResource]) -> Self {
        let mut groups = Self::default();
        for resource in resources {
            let Some(kind) = GroupKind::for_status(resource.status) else {
                tracing::debug!(
                    path = %resource.path.display(),
                    status = ?resource.status,
                    "resource not shown in any group"
                );
                continue;
            };
            groups
                .group_mut(kind)
                .push(ResourceState::new(root, resource.clone()));
        }
        groups
    }

    pub fn group(&self, kind: GroupKind) -> &[ResourceState] {
        match kind {
            GroupKind::Staged => &self.staged,
            GroupKind::Changes => &self.changes,
            GroupKind::Conflicts => &self.conflicts,
            GroupKind::Repository => &self.repository,
            GroupKind::Untracked => &self.untracked,
        }
    }

    fn group_mut(&mut self, kind: GroupKind) -> &mut Vec<ResourceState> {
        match kind {
            GroupKind::Staged => &mut self.staged,
            GroupKind::Changes => &mut self.changes,
            GroupKind::Conflicts => &mut self.conflicts,
            GroupKind::Repository => &mut self.repository,
            GroupKind::Untracked => &mut self.untracked,
        }
    }

    /// Paths a "commit all" would include: staged files, then modified ones
    ///
    /// Lost files stay out; cvs refuses the whole commit if one is listed.
    pub fn committable(&self) -> impl Iterator<Item = &TrackedResource> {
        self.staged
            .iter()
            .chain(
                self.changes
                    .iter()
                    .filter(|state| state.resource.status == FileStatus::Modified),
            )
            .map(|state| &state.resource)
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
            && self.changes.is_empty()
            && self.conflicts.is_empty()
            && self.repository.is_empty()
            && self.untracked.is_empty()
    }
}

//! File status data model

use std::path::PathBuf;

use super::RevisionId;

/// State of one path in the working copy
///
/// The set is closed: codes cvs prints that map to nothing here become
/// [`FileStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// Locally modified
    Modified,

    /// Not under version control
    Untracked,

    /// Scheduled for addition
    Added,

    /// Scheduled for removal
    Removed,

    /// Tracked but missing from disk
    Deleted,

    /// Merge left conflict markers
    Conflict,

    /// Newer revision in the repository, fetchable as a patch
    Patch,

    /// Locally modified and a newer revision exists
    Merge,

    /// Newer revision in the repository to check out
    Checkout,

    /// Removed from the repository, still present locally
    RemovedFromRepo,

    /// Directory present in the repository only
    Directory,

    /// Tracked and identical to its working revision
    UpToDate,

    /// Anything cvs printed that is not recognized
    Unknown,
}

impl FileStatus {
    /// Map a single-character `cvs update` code
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => FileStatus::Modified,
            "?" => FileStatus::Untracked,
            "A" => FileStatus::Added,
            "R" => FileStatus::Removed,
            "C" => FileStatus::Conflict,
            "U" => FileStatus::Checkout,
            "P" => FileStatus::Patch,
            _ => FileStatus::Unknown,
        }
    }

    /// Map the `Status:` text of a `cvs status` record
    pub fn from_status_text(text: &str) -> Self {
        match text.trim() {
            "Up-to-date" => FileStatus::UpToDate,
            "Locally Modified" => FileStatus::Modified,
            "Locally Added" => FileStatus::Added,
            "Locally Removed" => FileStatus::Removed,
            "Needs Checkout" => FileStatus::Checkout,
            "Needs Patch" => FileStatus::Patch,
            "Needs Merge" => FileStatus::Merge,
            "File had conflicts on merge" | "Unresolved Conflict" => FileStatus::Conflict,
            "Entry Invalid" => FileStatus::RemovedFromRepo,
            _ => FileStatus::Unknown,
        }
    }

    /// Status indicator character for decorations
    pub fn indicator(&self) -> char {
        match self {
            FileStatus::Modified => 'M',
            FileStatus::Untracked => '?',
            FileStatus::Added => 'A',
            FileStatus::Removed => 'R',
            FileStatus::Deleted => 'D',
            FileStatus::Conflict => 'C',
            FileStatus::Patch => 'P',
            FileStatus::Merge => 'G',
            FileStatus::Checkout => 'U',
            FileStatus::RemovedFromRepo => 'X',
            FileStatus::Directory => 'd',
            FileStatus::UpToDate => ' ',
            FileStatus::Unknown => '!',
        }
    }

    /// Does the file have a log to show? Untracked and newly added files
    /// have no revisions in the repository yet.
    pub fn has_history(&self) -> bool {
        !matches!(self, FileStatus::Untracked | FileStatus::Added)
    }
}

/// One path reported by a status scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedResource {
    /// Path relative to the scanned root
    pub path: PathBuf,

    pub status: FileStatus,

    /// Is this a directory entry?
    pub is_folder: bool,

    /// Revision checked out in the working copy
    pub working_revision: Option<RevisionId>,

    /// Revision the repository holds for the file's line of development
    pub repository_revision: Option<RevisionId>,
}

impl TrackedResource {
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            is_folder: false,
            working_revision: None,
            repository_revision: None,
        }
    }

    pub fn folder(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            is_folder: true,
            ..Self::new(path, status)
        }
    }

    pub fn with_revisions(
        mut self,
        working: Option<RevisionId>,
        repository: Option<RevisionId>,
    ) -> Self {
        self.working_revision = working;
        self.repository_revision = repository;
        self
    }
}

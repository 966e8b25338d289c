//! Compare request data model
//!
//! A compare request names two sides of one file for the host's diff viewer.

use std::path::{Path, PathBuf};

use super::RevisionId;

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionRef {
    /// A stored revision
    Revision(RevisionId),
    /// Head of the main line in the repository
    Head,
    /// The file as it is on disk
    WorkingCopy,
}

impl RevisionRef {
    /// Short label used in compare titles
    pub fn label(&self) -> &str {
        match self {
            RevisionRef::Revision(id) => id.as_str(),
            RevisionRef::Head => "HEAD",
            RevisionRef::WorkingCopy => "Working",
        }
    }
}

/// Request to diff `left` against `right` for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    pub path: PathBuf,
    pub left: RevisionRef,
    pub right: RevisionRef,
    /// Title for the diff editor, e.g. `main.c (1.2) <-> (1.3)`
    pub title: String,
}

impl CompareRequest {
    pub fn new(path: &Path, left: RevisionRef, right: RevisionRef) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let title = format!("{} ({}) <-> ({})", name, left.label(), right.label());
        Self {
            path: path.to_path_buf(),
            left,
            right,
            title,
        }
    }
}

//! Commit (logged revision) data model

use std::path::Path;

use super::{CompareRequest, RevisionId, RevisionRef};
use crate::cvs::constants::{SHORT_MESSAGE_WIDTH, markers};

/// One logged revision of one file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitEntry {
    /// Revision this entry describes
    pub revision_id: RevisionId,

    /// Login name of the committer
    pub author: String,

    /// Commit date (`YYYY/MM/DD`, the first ten characters of the log date)
    pub date: String,

    /// First two message lines, each right-trimmed and followed by two spaces
    pub short_message: String,

    /// Complete message, one `\n`-terminated line per message line
    pub full_message: String,

    /// Synthetic entry standing for the repository head when the working
    /// copy is behind it
    pub is_head_marker: bool,

    /// Is this the revision checked out in the working copy?
    pub is_active_revision: bool,
}

impl CommitEntry {
    /// Synthetic entry announcing a newer head revision in the repository
    pub fn head_marker(head: RevisionId) -> Self {
        Self {
            short_message: format!("{}{}", markers::HEAD_REVISION_LABEL, head),
            revision_id: head,
            is_head_marker: true,
            ..Default::default()
        }
    }

    /// Label shown in a history list
    ///
    /// The head marker shows its message; other entries show the revision
    /// followed by the short message cut to 50 characters.
    pub fn label(&self) -> String {
        if self.is_head_marker {
            return self.short_message.clone();
        }
        let short: String = self.short_message.chars().take(SHORT_MESSAGE_WIDTH).collect();
        format!("{}  {}", self.revision_id, short)
    }

    /// Secondary text: `author, date` (empty for the head marker)
    pub fn description(&self) -> String {
        if self.is_head_marker {
            String::new()
        } else {
            format!("{}, {}", self.author, self.date)
        }
    }

    /// Context key the host uses to pick available actions
    pub fn context_value(&self) -> &'static str {
        if self.is_head_marker {
            "head"
        } else if self.is_active_revision {
            "active_revision"
        } else {
            "revision"
        }
    }

    /// Revision this entry is diffed against to show what it changed
    pub fn previous_revision(&self) -> Option<RevisionId> {
        if self.is_head_marker {
            None
        } else {
            self.revision_id.predecessor()
        }
    }

    /// Compare this revision with the one before it
    pub fn compare_with_previous(&self, path: &Path) -> Option<CompareRequest> {
        let previous = self.previous_revision()?;
        Some(CompareRequest::new(
            path,
            RevisionRef::Revision(previous),
            RevisionRef::Revision(self.revision_id.clone()),
        ))
    }

    /// Compare this revision with the file on disk
    pub fn compare_with_working(&self, path: &Path) -> CompareRequest {
        CompareRequest::new(
            path,
            RevisionRef::Revision(self.revision_id.clone()),
            RevisionRef::WorkingCopy,
        )
    }
}

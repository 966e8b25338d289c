//! File content at a stored revision, for the left side of a diff

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::CvsError;
use super::constants::markers;
use super::executor::{CommandRunner, split_file};
use crate::model::{Notification, RevisionRef};

/// Shared flag a caller sets to abandon a pending content request
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fetched content plus any warning raised while fetching it
#[derive(Debug, Clone, Default)]
pub struct RevisionContent {
    pub text: String,
    pub warning: Option<Notification>,
}

impl RevisionContent {
    /// Fetch `file` as stored at `revision`
    ///
    /// Returns the `Canceled` placeholder when the request was abandoned
    /// before cvs ran, and empty text plus a warning when cvs failed.
    /// [`RevisionRef::WorkingCopy`] is read from disk.
    pub fn fetch<R: CommandRunner + ?Sized>(
        runner: &R,
        file: &Path,
        revision: &RevisionRef,
        cancel: &CancelFlag,
    ) -> Self {
        if cancel.is_cancelled() {
            return Self {
                text: markers::CANCELED.to_string(),
                warning: None,
            };
        }

        let result = match revision {
            RevisionRef::Revision(id) => runner.revision_raw(file, Some(id)),
            RevisionRef::Head => runner.revision_raw(file, None),
            RevisionRef::WorkingCopy => std::fs::read_to_string(file).map_err(CvsError::from),
        };

        match result {
            Ok(text) => Self {
                text,
                warning: None,
            },
            Err(e) => {
                tracing::warn!(path = %file.display(), error = %e, "failed to fetch revision");
                let name = split_file(file)
                    .map(|(_, name)| name.to_string())
                    .unwrap_or_else(|_| file.display().to_string());
                Self {
                    text: String::new(),
                    warning: Some(Notification::warning(format!(
                        "Failed to obtain revision from repository: {}",
                        name
                    ))),
                }
            }
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.text == markers::CANCELED && self.warning.is_none()
    }
}

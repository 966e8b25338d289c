//! cvs command execution layer
//!
//! This module handles executing cvs commands and turning their output into
//! the structures in [`crate::model`].

pub mod constants;
pub mod content;
pub mod entries;
mod executor;
pub mod history;
/// Parser module (public for integration testing)
pub mod parser;

pub use content::{CancelFlag, RevisionContent};
pub use executor::{CommandRunner, CvsExecutor};
pub use history::{History, HistoryCache, HistoryResolver};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when executing cvs commands
#[derive(Error, Debug)]
pub enum CvsError {
    #[error("Not a cvs working copy")]
    NotACheckout,

    #[error("cvs command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("cvs returned no output for `{command}`")]
    EmptyOutput { command: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("cvs is not installed or not in PATH")]
    CvsNotFound,

    #[error("Missing commit message")]
    MissingCommitMessage,

    #[error("There is nothing to commit")]
    NothingToCommit,

    #[error("No entry for `{name}` in CVS/Entries")]
    EntryNotFound { name: String },

    #[error("Path has no file name or parent directory: {0}")]
    InvalidPath(PathBuf),
}

//! Data models for civet
//!
//! This module contains UI-independent data structures representing
//! cvs concepts like revisions, logged commits and file status.

mod commit;
mod compare;
mod file_status;
mod notification;
mod revision;

pub use commit::CommitEntry;
pub use compare::{CompareRequest, RevisionRef};
pub use file_status::{FileStatus, TrackedResource};
pub use notification::Notification;
pub use revision::RevisionId;

//! Source-control panel model
//!
//! Groups scanned resources for display, debounces refreshes and ties the
//! cvs layer together for one working copy.

mod groups;
mod scheduler;
mod workspace;

pub use groups::{GroupKind, ResourceGroups, ResourceState};
pub use scheduler::{RefreshRequest, RefreshScheduler};
pub use workspace::{Snapshot, Workspace};

//! Debounced status refresh for one watched root
//!
//! File-change notifications arrive in bursts. Each one pushes a single
//! pending deadline out by the quiet period; the owner polls and runs one
//! rescan once the deadline passes.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::cvs::constants::REFRESH_QUIET_PERIOD;

/// A rescan that became due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub root: PathBuf,
    /// Path whose change armed the deadline last
    pub trigger: PathBuf,
}

#[derive(Debug, Clone)]
struct Pending {
    due: Instant,
    trigger: PathBuf,
}

/// Per-root refresh scheduler
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    root: PathBuf,
    quiet_period: Duration,
    pending: Option<Pending>,
    locked: bool,
}

impl RefreshScheduler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            quiet_period: REFRESH_QUIET_PERIOD,
            pending: None,
            locked: false,
        }
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record a change at `path`, replacing any pending deadline
    ///
    /// Ignored while locked: the workspace's own cvs commands touch files
    /// and would otherwise schedule rescans of their own.
    pub fn notify(&mut self, path: impl Into<PathBuf>, now: Instant) {
        if self.locked {
            return;
        }
        self.pending = Some(Pending {
            due: now + self.quiet_period,
            trigger: path.into(),
        });
    }

    /// Suppress notifications until [`Self::unlock`]
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Resume notifications and schedule a rescan right away
    pub fn unlock(&mut self, now: Instant) {
        if !self.locked {
            return;
        }
        self.locked = false;
        self.pending = Some(Pending {
            due: now,
            trigger: self.root.clone(),
        });
    }

    /// When the pending rescan becomes due, if one is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending rescan if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<RefreshRequest> {
        if self.pending.as_ref()?.due > now {
            return None;
        }
        let pending = self.pending.take()?;
        Some(RefreshRequest {
            root: self.root.clone(),
            trigger: pending.trigger,
        })
    }
}

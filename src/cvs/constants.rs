//! cvs-specific constants
//!
//! Centralized definitions for cvs command names, flags, output markers and
//! the limits the history walk and refresh scheduling rely on.

use std::time::Duration;

/// cvs command binary name
pub const CVS_COMMAND: &str = "cvs";

/// Environment variable overriding the cvs binary
pub const CVS_BIN_ENV: &str = "CVS_BIN";

/// Maximum number of log fetches for one history walk (one per branch hop)
pub const MAX_BRANCH_HOPS: usize = 10;

/// Quiet period before a scheduled status rescan fires
pub const REFRESH_QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Characters of the short message shown next to a revision
pub const SHORT_MESSAGE_WIDTH: usize = 50;

/// cvs subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const STATUS: &str = "status";
    pub const UPDATE: &str = "update";
    pub const ADD: &str = "add";
    pub const COMMIT: &str = "commit";
}

/// cvs command flags
pub mod flags {
    /// Omit the symbolic tag list from `cvs log`
    pub const NO_TAGS: &str = "-N";
    /// Dry run (global flag, must precede the subcommand)
    pub const DRY_RUN: &str = "-n";
    /// Somewhat quiet (global flag)
    pub const QUIET: &str = "-q";
    /// Really quiet (global flag)
    pub const REALLY_QUIET: &str = "-Q";
    /// Write file contents to stdout (`update`)
    pub const TO_STDOUT: &str = "-p";
    /// Reset sticky tags, i.e. the head of the main line (`update`)
    pub const RESET_STICKY: &str = "-A";
    /// Discard local changes (`update`)
    pub const CLEAN: &str = "-C";
    /// Commit message
    pub const MESSAGE: &str = "-m";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Markers inside cvs output
pub mod markers {
    /// Header line holding the head revision in `cvs log`
    pub const HEAD: &str = "head:";
    /// Metadata tokens on a log record's date line
    pub const DATE: &str = "date:";
    pub const AUTHOR: &str = "author:";
    /// Branch list line following a log record's date line
    pub const BRANCHES: &str = "branches:";
    /// Label prefix of the synthetic head entry
    pub const HEAD_REVISION_LABEL: &str = "Head Revision: ";
    /// Placeholder returned for an abandoned content request
    pub const CANCELED: &str = "Canceled";
}

/// Error detection patterns in cvs output
pub mod errors {
    /// Pattern indicating the directory is not a cvs working copy
    pub const NOT_A_CHECKOUT: &str = "No CVSROOT specified";
    pub const NO_CVS_DIRECTORY: &str = "cannot open CVS/Entries";
}

/// Working-copy bookkeeping layout
pub mod admin {
    pub const DIR: &str = "CVS";
    pub const ENTRIES: &str = "Entries";
    pub const ENTRIES_OUT: &str = "Entries.out";
    pub const ENTRIES_BACKUP: &str = "Entries.bak";
}

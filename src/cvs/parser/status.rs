//! Status output parsers (cvs -n -q update, cvs status)

use std::path::{Path, PathBuf};

use super::{
    EXAMINING_REGEX, LOST_REGEX, NEW_DIRECTORY_REGEX, NO_LONGER_IN_REPO_REGEX, Parser,
    STATUS_FILE_REGEX, STATUS_REVISION_REGEX, unquote,
};
use crate::model::{FileStatus, RevisionId, TrackedResource};

impl Parser {
    /// Parse `cvs -n -q update` output
    ///
    /// Formats:
    /// - "M path" / "? path" / "A path" / "R path" / "C path" / "U path" / "P path"
    /// - "cvs update: warning: `path' was lost" (deleted)
    /// - "cvs update: `path' is no longer in the repository"
    /// - "cvs update: New directory `path' -- ignored"
    ///
    /// Unrecognized codes become [`FileStatus::Unknown`]; other lines are
    /// skipped.
    pub fn parse_update(output: &str) -> Vec<TrackedResource> {
        output
            .lines()
            .filter_map(Self::parse_update_line)
            .collect()
    }

    /// Parse a single `cvs update` line into a TrackedResource
    pub(super) fn parse_update_line(line: &str) -> Option<TrackedResource> {
        let line = line.trim_end();

        if let Some(caps) = LOST_REGEX.captures(line) {
            return Some(TrackedResource::new(unquote(&caps[1]), FileStatus::Deleted));
        }
        if let Some(caps) = NO_LONGER_IN_REPO_REGEX.captures(line) {
            return Some(TrackedResource::new(
                unquote(&caps[1]),
                FileStatus::RemovedFromRepo,
            ));
        }
        if let Some(caps) = NEW_DIRECTORY_REGEX.captures(line) {
            return Some(TrackedResource::folder(
                unquote(&caps[1]),
                FileStatus::Directory,
            ));
        }

        // "<code> <path>"
        let mut chars = line.chars();
        let code = chars.next()?;
        if code.is_whitespace() || chars.next() != Some(' ') {
            return None;
        }
        let path = line.get(code.len_utf8() + 1..)?.trim();
        if path.is_empty() {
            return None;
        }

        let status = FileStatus::from_code(code.encode_utf8(&mut [0; 4]));
        if status == FileStatus::Unknown {
            tracing::debug!(%code, %path, "unrecognized cvs update code");
        }
        Some(TrackedResource::new(path, status))
    }

    /// Parse `cvs status` output
    ///
    /// Each `File:` line opens a record; the `Working revision:` and
    /// `Repository revision:` lines that follow fill in its revisions.
    /// `cvs status: Examining <dir>` lines set the directory records are
    /// relative to.
    pub fn parse_status(output: &str) -> Vec<TrackedResource> {
        let mut resources = Vec::new();
        let mut current: Option<TrackedResource> = None;
        let mut directory = PathBuf::new();

        for line in output.lines() {
            let line = line.trim();

            if let Some(caps) = EXAMINING_REGEX.captures(line) {
                let dir = caps[1].trim();
                directory = if dir == "." {
                    PathBuf::new()
                } else {
                    PathBuf::from(dir)
                };
                continue;
            }

            if let Some(caps) = STATUS_FILE_REGEX.captures(line) {
                resources.extend(current.take());
                let missing = caps.get(1).is_some();
                let mut status = FileStatus::from_status_text(&caps[3]);
                if missing && status == FileStatus::Checkout {
                    status = FileStatus::Deleted;
                }
                current = Some(TrackedResource::new(
                    join_relative(&directory, &caps[2]),
                    status,
                ));
                continue;
            }

            if let Some(caps) = STATUS_REVISION_REGEX.captures(line)
                && let Some(ref mut resource) = current
            {
                let revision = revision_token(&caps[2]);
                match &caps[1] {
                    "Working" => resource.working_revision = revision,
                    _ => resource.repository_revision = revision,
                }
            }
        }

        resources.extend(current);
        resources
    }
}

fn join_relative(directory: &Path, name: &str) -> PathBuf {
    if directory.as_os_str().is_empty() {
        PathBuf::from(name)
    } else {
        directory.join(name)
    }
}

/// Revision from a status revision column
///
/// Locally removed files show their working revision negated (`-1.2`);
/// placeholders such as `New file!` or `No revision control file` carry
/// no revision.
fn revision_token(token: &str) -> Option<RevisionId> {
    let token = token.strip_prefix('-').unwrap_or(token);
    token
        .starts_with(|c: char| c.is_ascii_digit())
        .then(|| RevisionId::new(token))
}

//! cvs output parser
//!
//! Parses the output from cvs commands into structured data. Every parser
//! here fails soft: unexpected lines are skipped or mapped to neutral
//! values, never turned into errors.

mod log;
mod status;

pub use log::ParsedLog;

#[cfg(test)]
mod tests;

use regex::Regex;
use std::sync::LazyLock;

/// Terminator of a `cvs log` file block: a line of `=` characters
static LOG_TERMINATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n=+(?:\r?\n|$)").expect("Invalid log terminator regex"));

/// Boundary between log records: a rule of ten or more dashes followed by
/// `revision <id>` on the next line
static LOG_RECORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r?\n-{10,}\r?\nrevision[ \t]").expect("Invalid log record regex")
});

/// `author: <name>;` on a log record's metadata line
static AUTHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"author:\s(.*?);").expect("Invalid author regex"));

/// `date: <10 chars> ` on a log record's metadata line
///
/// Example: `date: 2021/03/04 10:11:12;  author: jon;  state: Exp;`
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"date:\s(.{10})\s").expect("Invalid date regex"));

/// `cvs update: warning: `<path>' was lost`
static LOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+ \S+: warning: (.+) was lost$").expect("Invalid lost file regex")
});

/// `cvs update: `<path>' is no longer in the repository`
static NO_LONGER_IN_REPO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+ \S+: (.+) is no longer in the repository$")
        .expect("Invalid removed-from-repository regex")
});

/// `cvs update: New directory `<path>' -- ignored`
static NEW_DIRECTORY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+ \S+: New directory (.+) -- ignored$").expect("Invalid new directory regex")
});

/// `cvs status: Examining <dir>`
static EXAMINING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+ \S+: Examining (.+)$").expect("Invalid examining regex")
});

/// `File: [no file ]<name>   Status: <text>`
static STATUS_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^File:\s+(no file\s+)?(.+?)\s+Status:\s+(.+)$").expect("Invalid status file regex")
});

/// `Working revision:\t1.7\t...` / `Repository revision:\t1.9\t/cvsroot/a.c,v`
static STATUS_REVISION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Working|Repository) revision:\s+(\S+)").expect("Invalid status revision regex")
});

/// Parser for cvs command output
pub struct Parser;

/// Strip the `` `path' `` or `'path'` quoting cvs puts around paths
fn unquote(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix('`')
        .or_else(|| text.strip_prefix('\''))
        .unwrap_or(text);
    text.strip_suffix('\'').unwrap_or(text)
}

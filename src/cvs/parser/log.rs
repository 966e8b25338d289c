//! Log output parser (cvs log)
//!
//! A `cvs log` block for one file looks like:
//!
//! ```text
//! RCS file: /cvsroot/proj/main.c,v
//! Working file: main.c
//! head: 1.9
//! ...
//! ----------------------------
//! revision 1.3.2.2
//! date: 2021/03/04 10:11:12;  author: jon;  state: Exp;  lines: +2 -1;
//! Fix overflow in the tokenizer
//! ----------------------------
//! revision 1.3.2.1
//! ...
//! =============================================================================
//! ```

use super::{AUTHOR_REGEX, DATE_REGEX, LOG_RECORD_REGEX, LOG_TERMINATOR_REGEX, Parser};
use crate::cvs::constants::markers;
use crate::model::{CommitEntry, RevisionId};

/// Result of parsing one file's log block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLog {
    /// Revision named on the `head:` header line (empty when absent)
    pub head: RevisionId,

    /// Records in the order cvs printed them (newest first)
    pub entries: Vec<CommitEntry>,
}

/// Where the record state machine is within one revision record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    SeekingRevisionId,
    SeekingMetadata,
    AccumulatingMessage,
}

/// Builds one [`CommitEntry`] from the lines of a record
struct RecordBuilder {
    state: RecordState,
    entry: CommitEntry,
    message_lines: usize,
}

impl RecordBuilder {
    fn new() -> Self {
        Self {
            state: RecordState::SeekingRevisionId,
            entry: CommitEntry::default(),
            message_lines: 0,
        }
    }

    fn feed(&mut self, line: &str) {
        match self.state {
            RecordState::SeekingRevisionId => {
                // `1.3` or `1.3<TAB>locked by: jon;`
                if let Some(id) = line.split_whitespace().next() {
                    self.entry.revision_id = RevisionId::new(id);
                    self.state = RecordState::SeekingMetadata;
                }
            }
            RecordState::SeekingMetadata => {
                if line.contains(markers::DATE) && line.contains(markers::AUTHOR) {
                    self.read_metadata(line);
                    self.state = RecordState::AccumulatingMessage;
                } else if !is_branches_line(line) {
                    self.push_message(line);
                }
            }
            RecordState::AccumulatingMessage => {
                if !is_branches_line(line) {
                    self.push_message(line);
                }
            }
        }
    }

    fn read_metadata(&mut self, line: &str) {
        if let Some(caps) = AUTHOR_REGEX.captures(line) {
            self.entry.author = caps[1].to_string();
        }
        if let Some(caps) = DATE_REGEX.captures(line) {
            self.entry.date = caps[1].to_string();
        }
    }

    fn push_message(&mut self, line: &str) {
        if self.message_lines < 2 {
            self.entry.short_message.push_str(line.trim_end());
            self.entry.short_message.push_str("  ");
        }
        self.entry.full_message.push_str(line);
        self.entry.full_message.push('\n');
        self.message_lines += 1;
    }

    fn finish(self, working_revision: Option<&RevisionId>) -> CommitEntry {
        let mut entry = self.entry;
        entry.is_active_revision = working_revision == Some(&entry.revision_id);
        entry
    }
}

/// `branches:` lines are never message text
fn is_branches_line(line: &str) -> bool {
    line.contains(markers::BRANCHES)
}

impl Parser {
    /// Parse `cvs log` output for a single file
    ///
    /// `working_revision` marks the entry checked out in the working copy.
    /// Never fails: records missing metadata keep empty fields and text
    /// without any record boundary yields no entries.
    pub fn parse_log(output: &str, working_revision: Option<&RevisionId>) -> ParsedLog {
        // Everything after the `=====` terminator belongs to no record
        let body = LOG_TERMINATOR_REGEX
            .splitn(output, 2)
            .next()
            .unwrap_or_default();

        let mut segments = LOG_RECORD_REGEX.split(body);
        let header = segments.next().unwrap_or_default();

        let entries = segments
            .map(|record| {
                let mut builder = RecordBuilder::new();
                for line in record.lines() {
                    builder.feed(line);
                }
                builder.finish(working_revision)
            })
            .collect();

        ParsedLog {
            head: Self::parse_head_revision(header),
            entries,
        }
    }

    /// Read the `head: <rev>` header line
    pub(super) fn parse_head_revision(header: &str) -> RevisionId {
        header
            .lines()
            .find_map(|line| {
                let start = line.find(markers::HEAD)? + markers::HEAD.len();
                Some(RevisionId::new(line[start..].trim()))
            })
            .unwrap_or_default()
    }
}

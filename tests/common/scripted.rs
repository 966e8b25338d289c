//! ScriptedRunner: replays canned cvs output.
//!
//! Answers are keyed by subcommand, and for `log` and `update -p` by the
//! requested revision. Every invocation is recorded so tests can assert
//! which cvs commands ran.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use civet::cvs::{CommandRunner, CvsError};

/// Key used for `update -p -A` (head of the main line)
pub const HEAD_CONTENT: &str = "HEAD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

#[derive(Default)]
pub struct ScriptedRunner {
    logs: HashMap<String, String>,
    contents: HashMap<String, String>,
    status: Option<String>,
    update: Option<String>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `log -r:<revision>` with `output`
    pub fn with_log(mut self, revision: &str, output: impl Into<String>) -> Self {
        self.logs.insert(revision.to_string(), output.into());
        self
    }

    /// Answer `update -p -r<revision>` (or `-A` for [`HEAD_CONTENT`])
    pub fn with_content(mut self, revision: &str, text: &str) -> Self {
        self.contents.insert(revision.to_string(), text.to_string());
        self
    }

    pub fn with_status(mut self, output: &str) -> Self {
        self.status = Some(output.to_string());
        self
    }

    pub fn with_update(mut self, output: &str) -> Self {
        self.update = Some(output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// First non-flag argument of every invocation
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.args.iter().find(|a| !a.starts_with('-')).cloned())
            .collect()
    }

    /// Revisions passed to `log -r:<rev>`, in request order
    pub fn log_requests(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.args.iter().find_map(|a| a.strip_prefix("-r:")))
            .map(str::to_string)
            .collect()
    }

    fn failed(what: &str) -> CvsError {
        CvsError::CommandFailed {
            stderr: format!("cvs: no scripted answer for {}", what),
            exit_code: 1,
        }
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, CvsError> {
        self.calls.borrow_mut().push(Invocation {
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: working_dir.to_path_buf(),
        });

        if args.contains(&"log") {
            let revision = args
                .iter()
                .find_map(|a| a.strip_prefix("-r:"))
                .unwrap_or_default();
            return self
                .logs
                .get(revision)
                .cloned()
                .ok_or_else(|| Self::failed(&format!("log -r:{}", revision)));
        }
        if args.contains(&"-p") {
            let revision = args
                .iter()
                .find_map(|a| a.strip_prefix("-r"))
                .unwrap_or(HEAD_CONTENT);
            return self
                .contents
                .get(revision)
                .cloned()
                .ok_or_else(|| Self::failed(&format!("update -p {}", revision)));
        }
        if args.contains(&"status") {
            return self.status.clone().ok_or_else(|| Self::failed("status"));
        }
        if args.contains(&"update") && args.contains(&"-n") {
            return self.update.clone().ok_or_else(|| Self::failed("update -n"));
        }
        Ok(String::new())
    }
}

/// Build one file's `cvs log` block
///
/// `records` are `(revision, author, date, message)` newest first; `date`
/// is `YYYY/MM/DD`.
pub fn log_output(file: &str, head: &str, records: &[(&str, &str, &str, &str)]) -> String {
    let mut out = format!(
        "\nRCS file: /cvsroot/proj/{file},v\nWorking file: {file}\nhead: {head}\nbranch:\nlocks: strict\naccess list:\nkeyword substitution: kv\ntotal revisions: {total};\tselected revisions: {total}\ndescription:",
        file = file,
        head = head,
        total = records.len()
    );
    for (revision, author, date, message) in records {
        out.push_str(&format!(
            "\n----------------------------\nrevision {}\ndate: {} 12:00:00;  author: {};  state: Exp;  lines: +1 -1;\n{}",
            revision, date, author, message
        ));
    }
    out.push_str("\n=============================================================================\n");
    out
}

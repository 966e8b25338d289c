//! cvs command executor
//!
//! Handles running cvs commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::CvsError;
use super::constants::{self, commands, errors, flags};
use crate::model::RevisionId;

/// Runs cvs with a set of arguments inside a working directory
///
/// Everything above this seam consumes plain stdout text, which keeps the
/// parsers and the history walk testable without a cvs installation.
pub trait CommandRunner {
    /// Run cvs and return its stdout on success
    fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, CvsError>;

    /// Run `cvs log -N -r:<rev> <file>` from the file's directory
    ///
    /// Restricting the range to `:<rev>` yields every revision on the
    /// revision's own line up to and including it.
    fn log_raw(&self, file: &Path, revision: &RevisionId) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        let range = format!("-r:{}", revision);
        let args = [commands::LOG, flags::NO_TAGS, range.as_str(), name];
        let output = self.run(&args, dir)?;
        if output.is_empty() {
            return Err(CvsError::EmptyOutput {
                command: args.join(" "),
            });
        }
        Ok(output)
    }

    /// Run `cvs -Q update -p` to print a file's content at a revision
    ///
    /// `None` selects the head of the main line.
    fn revision_raw(&self, file: &Path, revision: Option<&RevisionId>) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        let selector = match revision {
            Some(id) => format!("-r{}", id),
            None => flags::RESET_STICKY.to_string(),
        };
        self.run(
            &[flags::REALLY_QUIET, commands::UPDATE, flags::TO_STDOUT, &selector, name],
            dir,
        )
    }

    /// Run `cvs status <file>` from the file's directory
    fn status_raw(&self, file: &Path) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        self.run(&[commands::STATUS, name], dir)
    }

    /// Run `cvs -n -q update` for the whole tree below `root`
    fn update_preview_raw(&self, root: &Path) -> Result<String, CvsError> {
        self.run(&[flags::DRY_RUN, flags::QUIET, commands::UPDATE], root)
    }

    /// Run `cvs add <file>`
    fn add(&self, file: &Path) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        self.run(&[commands::ADD, name], dir)
    }

    /// Run `cvs update -C <file>`, discarding local modifications
    fn revert(&self, file: &Path) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        self.run(&[commands::UPDATE, flags::CLEAN, name], dir)
    }

    /// Run `cvs commit -m <message> <files..>` from `root`
    ///
    /// `files` are relative to `root`.
    fn commit(&self, root: &Path, files: &[&str], message: &str) -> Result<String, CvsError> {
        if message.trim().is_empty() {
            return Err(CvsError::MissingCommitMessage);
        }
        if files.is_empty() {
            return Err(CvsError::NothingToCommit);
        }
        let mut args = vec![commands::COMMIT, flags::MESSAGE, message];
        args.extend_from_slice(files);
        self.run(&args, root)
    }

    /// Run `cvs commit -m <message> <file>` from the file's directory
    fn commit_file(&self, file: &Path, message: &str) -> Result<String, CvsError> {
        let (dir, name) = split_file(file)?;
        self.commit(dir, &[name], message)
    }
}

/// Split a file path into the directory to run in and the bare file name
pub(crate) fn split_file(file: &Path) -> Result<(&Path, &str), CvsError> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CvsError::InvalidPath(file.to_path_buf()))?;
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, name))
}

/// Executor spawning the real cvs binary
#[derive(Debug, Clone)]
pub struct CvsExecutor {
    /// Binary to run
    program: PathBuf,
}

impl Default for CvsExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CvsExecutor {
    /// Create an executor for `cvs`, honouring the `CVS_BIN` override
    pub fn new() -> Self {
        let program = std::env::var_os(constants::CVS_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(constants::CVS_COMMAND));
        Self { program }
    }

    /// Create an executor for a specific cvs binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Binary this executor spawns
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Get the cvs version banner line
    pub fn version(&self) -> Result<String, CvsError> {
        let output = self.run(&[flags::VERSION], Path::new("."))?;
        Ok(output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string())
    }
}

impl CommandRunner for CvsExecutor {
    fn run(&self, args: &[&str], working_dir: &Path) -> Result<String, CvsError> {
        tracing::debug!(
            program = %self.program.display(),
            ?args,
            dir = %working_dir.display(),
            "running cvs"
        );

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CvsError::CvsNotFound
                } else {
                    CvsError::IoError(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_CHECKOUT) || stderr.contains(errors::NO_CVS_DIRECTORY)
            {
                return Err(CvsError::NotACheckout);
            }

            Err(CvsError::CommandFailed { stderr, exit_code })
        }
    }
}

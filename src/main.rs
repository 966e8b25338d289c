//! civet - CVS history and status model
//!
//! Binary entry point: prints a file's branch-aware history, the working
//! copy status, or a file at a revision, and runs undo-add and commit.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use civet::cvs::{CancelFlag, CvsExecutor};
use civet::model::{Notification, RevisionId, RevisionRef};
use civet::scm::{GroupKind, Workspace};

#[derive(Debug, Parser)]
#[command(name = "civet", version, about = "Inspect CVS history and working-copy status")]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// cvs binary to run
    #[arg(long, global = true, env = "CVS_BIN")]
    cvs: Option<PathBuf>,

    /// Working copy root
    #[arg(short = 'C', long = "root", global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Branch-aware history of a file
    Log { file: PathBuf },
    /// Changed, incoming and untracked files
    Status,
    /// A file's content at a revision (head of the main line if omitted)
    Show {
        file: PathBuf,
        revision: Option<String>,
    },
    /// Undo `cvs add` of a file that was never committed
    UndoAdd { file: PathBuf },
    /// Commit one file, or every staged and modified file
    Commit {
        #[arg(short, long)]
        message: String,
        file: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("civet={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let executor = match &cli.cvs {
        Some(program) => CvsExecutor::with_program(program),
        None => CvsExecutor::new(),
    };
    if cli.verbose {
        match executor.version() {
            Ok(version) => tracing::debug!(
                program = %executor.program().display(),
                %version,
                "cvs found"
            ),
            Err(e) => tracing::warn!(error = %e, "cvs version check failed"),
        }
    }
    let mut workspace = Workspace::new(&cli.root, executor);

    match cli.command {
        Command::Log { file } => {
            workspace.rescan().wrap_err("cvs status scan failed")?;
            let history = workspace.history(&file);
            report(&history.warnings);
            for entry in &history.entries {
                let marker = if entry.is_active_revision { '*' } else { ' ' };
                let description = entry.description();
                if description.is_empty() {
                    println!("{} {}", marker, entry.label());
                } else {
                    println!("{} {}  ({})", marker, entry.label(), description);
                }
            }
        }
        Command::Status => {
            workspace.rescan().wrap_err("cvs status scan failed")?;
            let groups = workspace.groups();
            for kind in [
                GroupKind::Staged,
                GroupKind::Changes,
                GroupKind::Conflicts,
                GroupKind::Repository,
                GroupKind::Untracked,
            ] {
                let states = groups.group(kind);
                if states.is_empty() {
                    continue;
                }
                println!("{}:", kind.label());
                for state in states {
                    println!(
                        "  {} {}",
                        state.resource.status.indicator(),
                        state.resource.path.display()
                    );
                }
            }
        }
        Command::Show { file, revision } => {
            let revision = match revision {
                Some(id) => RevisionRef::Revision(RevisionId::new(id)),
                None => RevisionRef::Head,
            };
            let content = workspace.revision_content(&file, &revision, &CancelFlag::new());
            if let Some(warning) = content.warning {
                return Err(eyre!(warning.message));
            }
            print!("{}", content.text);
        }
        Command::UndoAdd { file } => {
            workspace
                .undo_add(&file)
                .wrap_err_with(|| format!("undo add failed for {}", file.display()))?;
        }
        Command::Commit { message, file } => {
            let output = match file {
                Some(file) => workspace
                    .commit_file(&file, &message)
                    .wrap_err_with(|| format!("commit failed for {}", file.display()))?,
                None => {
                    workspace.rescan().wrap_err("cvs status scan failed")?;
                    workspace.commit_all(&message).wrap_err("commit failed")?
                }
            };
            print!("{}", output);
        }
    }

    Ok(())
}

/// Print advisory notifications to stderr
fn report(notifications: &[Notification]) {
    for notification in notifications {
        eprintln!("{}", notification);
    }
}

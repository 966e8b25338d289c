//! `CVS/Entries` bookkeeping
//!
//! `cvs add` records a new file as a line in `CVS/Entries` plus per-file
//! scratch files (`CVS/<name>,t`). Until the file is committed, undoing the
//! add means deleting both.

use std::fs;
use std::path::Path;

use super::CvsError;
use super::constants::admin;
use super::executor::split_file;

/// Drop the first entry line whose name field is `name`
///
/// Entry lines look like `/main.c/1.3/Thu Mar  4 10:11:12 2021//` (files) or
/// `D/lib////` (directories). Returns `None` when no file entry matches.
pub fn remove_entry_line(entries: &str, name: &str) -> Option<String> {
    let mut removed = false;
    let mut kept = String::with_capacity(entries.len());

    for line in entries.split_inclusive('\n') {
        let mut fields = line.trim_end_matches(['\r', '\n']).split('/');
        let is_match = fields.next() == Some("") && fields.next() == Some(name);
        if is_match && !removed {
            removed = true;
        } else {
            kept.push_str(line);
        }
    }

    removed.then_some(kept)
}

/// Undo `cvs add` for a file that was never committed
///
/// Fails with [`CvsError::EntryNotFound`] before changing anything when
/// `CVS/Entries` has no line for the file. Otherwise the per-file scratch
/// files are removed, the rewritten entries go to `Entries.out`, the old
/// file is copied to `Entries.bak`, and `Entries.out` is renamed over
/// `Entries`.
pub fn undo_add(file: &Path) -> Result<(), CvsError> {
    let (dir, name) = split_file(file)?;
    let admin_dir = dir.join(admin::DIR);

    // Nothing is touched unless the file has an entry to remove
    let entries_path = admin_dir.join(admin::ENTRIES);
    let content = fs::read_to_string(&entries_path)?;
    let updated = remove_entry_line(&content, name).ok_or_else(|| CvsError::EntryNotFound {
        name: name.to_string(),
    })?;

    let scratch_prefix = format!("{},", name);
    for entry in fs::read_dir(&admin_dir)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_str()
            .is_some_and(|n| n.starts_with(&scratch_prefix))
        {
            tracing::debug!(path = %entry.path().display(), "removing cvs scratch file");
            fs::remove_file(entry.path())?;
        }
    }

    let out_path = admin_dir.join(admin::ENTRIES_OUT);
    fs::write(&out_path, updated)?;
    let out_guard = scopeguard::guard(out_path, |path| {
        let _ = fs::remove_file(path);
    });

    fs::copy(&entries_path, admin_dir.join(admin::ENTRIES_BACKUP))?;
    fs::rename(&*out_guard, &entries_path)?;
    scopeguard::ScopeGuard::into_inner(out_guard);

    tracing::debug!(%name, "removed entry from CVS/Entries");
    Ok(())
}

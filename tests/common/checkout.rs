//! Checkout helper for integration tests.
//!
//! Lays out the `CVS/` administrative files of a working copy in a
//! temporary directory, without needing a cvs installation.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A fake cvs working copy.
///
/// The directory is automatically cleaned up when the Checkout is dropped.
pub struct Checkout {
    dir: TempDir,
}

impl Checkout {
    /// Create a working copy whose `CVS/Entries` holds `entries`.
    pub fn new(entries: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(dir.path().join("CVS")).expect("Failed to create CVS directory");
        fs::write(dir.path().join("CVS/Entries"), entries).expect("Failed to write Entries");
        fs::write(dir.path().join("CVS/Root"), ":local:/cvsroot\n").expect("Failed to write Root");
        Self { dir }
    }

    /// Get the path to the working copy root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write a file relative to the working copy root.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Path of a file inside the `CVS/` directory.
    pub fn admin_path(&self, name: &str) -> PathBuf {
        self.dir.path().join("CVS").join(name)
    }

    /// Read a file inside the `CVS/` directory.
    pub fn read_admin(&self, name: &str) -> String {
        fs::read_to_string(self.admin_path(name)).expect("Failed to read admin file")
    }

    pub fn admin_exists(&self, name: &str) -> bool {
        self.admin_path(name).exists()
    }

    /// Path of a file relative to the working copy root.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

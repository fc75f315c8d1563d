//! Recursive directory scanner
//!
//! Lazily walks a source tree and yields the absolute path of every regular
//! file. Directories and symlinks are traversed but never yielded.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}

/// Directory scanner
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Iterate over every regular file below `root`.
    ///
    /// Order is unspecified. Unreadable entries and symlink loops are logged
    /// and skipped.
    pub fn files(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    tracing::error!("Scan error {}: {}", path, err);
                    None
                }
            })
            .filter(is_regular_file)
            .map(DirEntry::into_path)
    }
}

/// Regular files only; a symlink is never a source even when followed
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && !entry.path_is_symlink()
}

//! Extension keys
//!
//! The lower-cased file suffix names the destination subfolder.

use std::fmt;
use std::path::Path;

/// Folder name for files without a suffix
pub const NO_EXTENSION: &str = "no_extension";

/// Normalized destination folder name derived from a file's suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionKey(String);

impl ExtensionKey {
    /// Derive the key for a file path.
    ///
    /// Only the final suffix counts (`a.tar.gz` -> `gz`). A dot that starts
    /// or ends the name does not begin a suffix, so `.bashrc` and `file.`
    /// have none while `..a` has `a`.
    pub fn from_path(path: &Path) -> Self {
        let suffix = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .and_then(|name| match name.rfind('.') {
                Some(idx) if idx > 0 && idx + 1 < name.len() => {
                    Some(name[idx + 1..].to_lowercase())
                }
                _ => None,
            });

        match suffix {
            Some(ext) => Self(ext),
            None => Self(NO_EXTENSION.to_string()),
        }
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ExtensionKey {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

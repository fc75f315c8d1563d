//! Configuration settings for the file sorter
//!
//! Defines the CLI arguments, defaults, and path resolution for a run.

use crate::error::{IoResultExt, Result, SorterError};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Default log file, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "file_sorter.log";

/// file-sorter - sort files into per-extension folders
#[derive(Parser, Debug, Clone)]
#[command(name = "file-sorter")]
#[command(author = "File Sorter Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Async file sorting by extensions")]
#[command(long_about = r#"
Copies every file found under SOURCE into OUTPUT/<extension>/, keeping the
original file name, contents, permissions and timestamps. Files without an
extension go to OUTPUT/no_extension/.

All diagnostics are written to the log file; nothing is printed on success
or failure.

Examples:
  file-sorter ~/Downloads ~/Sorted
  file-sorter ./photos ./by-type --log-file /tmp/sort.log
"#)]
pub struct CliArgs {
    /// Source folder path
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output folder path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Log file path (appended to, never rotated)
    #[arg(long, env = "FILE_SORTER_LOG", default_value = DEFAULT_LOG_FILE, value_name = "PATH")]
    pub log_file: PathBuf,

    /// Do not descend into symlinked directories
    #[arg(long)]
    pub no_follow_symlinks: bool,
}

/// Resolved settings for a sort run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Source root (absolute)
    pub source: PathBuf,
    /// Output root (absolute, need not exist)
    pub output: PathBuf,
    /// Log file path
    pub log_file: PathBuf,
    /// Descend into symlinked directories while scanning
    pub follow_symlinks: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            output: PathBuf::from("sorted"),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            follow_symlinks: true,
        }
    }
}

impl SortConfig {
    /// Build configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        Ok(Self {
            source: resolve_path(&args.source)?,
            output: resolve_path(&args.output)?,
            log_file: args.log_file.clone(),
            follow_symlinks: !args.no_follow_symlinks,
        })
    }

    /// Check that the source root is an existing directory
    pub fn validate(&self) -> Result<()> {
        if !self.source.is_dir() {
            return Err(SorterError::SourceNotFound(self.source.clone()));
        }
        Ok(())
    }
}

/// Make a path absolute, canonicalizing it when it already exists.
/// An empty path means the current directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };

    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }

    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().with_path(".")?;
        Ok(cwd.join(path))
    }
}

//! # file-sorter - sort a directory tree by file extension
//!
//! Every regular file under a source folder is copied, with its permissions
//! and timestamps, into `<output>/<extension>/<file name>`. Extensions are
//! lower-cased; files without one go to `<output>/no_extension/`.
//!
//! Copies run as independent tasks on a single-threaded tokio runtime. A
//! failing copy is logged and never stops the others.
//!
//! ## Quick Start
//!
//! ```no_run
//! use file_sorter::core::sort_directory;
//! use std::path::Path;
//!
//! let processed = sort_directory(Path::new("/downloads"), Path::new("/sorted")).unwrap();
//! println!("Processed {} files", processed);
//! ```
//!
//! ## With Configuration
//!
//! ```no_run
//! use file_sorter::config::SortConfig;
//! use file_sorter::core::FileSorter;
//! use std::path::PathBuf;
//!
//! let config = SortConfig {
//!     source: PathBuf::from("/downloads"),
//!     output: PathBuf::from("/sorted"),
//!     follow_symlinks: false,
//!     ..Default::default()
//! };
//!
//! file_sorter::logging::init_logging(&config.log_file).unwrap();
//! FileSorter::new(config).run_logged();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;

// Re-export commonly used types
pub use crate::config::SortConfig;
pub use crate::core::{CopyOutcome, FileSorter};
pub use crate::error::{Result, SorterError};
pub use crate::fs::ExtensionKey;

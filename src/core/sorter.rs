//! Top-level sort run
//!
//! Validates the source, scans it, and hands every file to the dispatcher on
//! a single-threaded runtime. Copies interleave only while waiting on I/O.

use crate::config::SortConfig;
use crate::core::Dispatcher;
use crate::error::{Result, SorterError};
use crate::fs::{ScanConfig, Scanner};
use std::path::Path;

/// Sorts a source tree into per-extension folders
pub struct FileSorter {
    config: SortConfig,
}

impl FileSorter {
    /// Create a sorter for the given configuration
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Scan and copy everything. Returns the number of files processed,
    /// whether or not each copy succeeded.
    pub async fn execute(&self) -> Result<usize> {
        self.config.validate()?;

        let scanner = Scanner::new(ScanConfig {
            follow_symlinks: self.config.follow_symlinks,
        });
        let dispatcher = Dispatcher::new(&self.config.output);

        Ok(dispatcher.run(scanner.files(&self.config.source)).await)
    }

    /// Run [`execute`](Self::execute) on a fresh current-thread runtime
    pub fn run(&self) -> Result<usize> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SorterError::Runtime(e.to_string()))?;

        runtime.block_on(self.execute())
    }

    /// Run and send any top-level failure to the log instead of the caller
    pub fn run_logged(&self) {
        match self.run() {
            Ok(processed) => tracing::debug!(
                "Processed {} files from {}",
                processed,
                self.config.source.display()
            ),
            Err(e @ SorterError::SourceNotFound(_)) => tracing::error!("{}", e),
            Err(SorterError::Runtime(detail)) => tracing::error!("Runtime error: {}", detail),
            Err(e) => tracing::error!("Runtime error: {}", e),
        }
    }
}

/// Sort `source` into `output` with default settings
pub fn sort_directory(source: &Path, output: &Path) -> Result<usize> {
    let config = SortConfig {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        ..Default::default()
    };
    FileSorter::new(config).run()
}

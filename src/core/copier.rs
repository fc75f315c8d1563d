//! Per-file copy into the extension folder
//!
//! Each file goes through derive key -> ensure folder -> copy -> log, in that
//! order. Failures become a [`CopyOutcome::Failed`] and stop at the log.

use crate::error::{Result, SorterError};
use crate::fs::{copy_with_metadata, ensure_dir, ExtensionKey};
use std::path::{Path, PathBuf};

/// What happened to one source file
#[derive(Debug)]
pub enum CopyOutcome {
    /// File now lives in `target_dir`
    Copied {
        /// File that was copied
        source: PathBuf,
        /// Extension folder it was copied into
        target_dir: PathBuf,
        /// Bytes written
        bytes: u64,
    },
    /// Copy failed; siblings are unaffected
    Failed {
        /// File that could not be copied
        source: PathBuf,
        /// Why
        error: SorterError,
    },
}

impl CopyOutcome {
    /// Source path this outcome belongs to
    pub fn source(&self) -> &Path {
        match self {
            Self::Copied { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    /// Whether the copy succeeded
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Write the outcome's log record
    pub fn log(&self) {
        match self {
            Self::Copied {
                source,
                target_dir,
                bytes,
            } => {
                tracing::debug!("{} bytes written for {}", bytes, source.display());
                tracing::info!("File {} copied to {}", source.display(), target_dir.display());
            }
            Self::Failed { source, error } => {
                tracing::error!("Copying error {}: {}", source.display(), error);
            }
        }
    }
}

/// Copies single files into `output/<extension>/`
#[derive(Debug, Clone)]
pub struct Copier {
    output: PathBuf,
}

impl Copier {
    /// Create a copier rooted at `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Destination folder for `source`
    pub fn target_dir(&self, source: &Path) -> PathBuf {
        self.output.join(ExtensionKey::from_path(source))
    }

    /// Sort one file and log the result. Never fails.
    pub async fn sort_file(&self, source: PathBuf) -> CopyOutcome {
        let outcome = match self.try_sort(&source).await {
            Ok((target_dir, bytes)) => CopyOutcome::Copied {
                source,
                target_dir,
                bytes,
            },
            Err(error) => CopyOutcome::Failed { source, error },
        };
        outcome.log();
        outcome
    }

    async fn try_sort(&self, source: &Path) -> Result<(PathBuf, u64)> {
        let target_dir = self.target_dir(source);
        let file_name = source.file_name().ok_or_else(|| {
            SorterError::InvalidPath(format!("no file name in {}", source.display()))
        })?;

        ensure_dir(&target_dir).await?;

        let dest = target_dir.join(file_name);
        let bytes = copy_with_metadata(source.to_path_buf(), dest).await?;

        Ok((target_dir, bytes))
    }
}

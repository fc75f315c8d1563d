//! File operations used by the copier
//!
//! Blocking primitives run on tokio's blocking pool so the single-threaded
//! scheduler keeps interleaving other copies while one waits on the disk.

use crate::error::{IoResultExt, Result, SorterError};
use std::fs::{File, Metadata};
use std::path::{Path, PathBuf};

/// Copy `source` to `dest` with permissions and timestamps, replacing any
/// existing file at `dest`. Returns the number of bytes copied.
///
/// Refuses to copy a file onto itself, which would otherwise truncate it.
pub fn copy_file(source: &Path, dest: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(source).with_path(source)?;
    if !metadata.is_file() {
        return Err(SorterError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    if is_same_file(&metadata, source, dest) {
        return Err(SorterError::SameSourceAndDestination(source.to_path_buf()));
    }

    let mut src_file = File::open(source).with_path(source)?;
    let mut dst_file = File::create(dest).with_path(dest)?;

    // File-to-file copy lets std use copy_file_range/sendfile, no user buffers
    let bytes_copied =
        std::io::copy(&mut src_file, &mut dst_file).map_err(|e| SorterError::io(source, e))?;
    drop(dst_file);

    std::fs::set_permissions(dest, metadata.permissions()).with_path(dest)?;
    copy_times(&metadata, dest)?;

    Ok(bytes_copied)
}

#[cfg(unix)]
fn is_same_file(source_meta: &Metadata, _source: &Path, dest: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match std::fs::metadata(dest) {
        Ok(dest_meta) => {
            source_meta.dev() == dest_meta.dev() && source_meta.ino() == dest_meta.ino()
        }
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(_source_meta: &Metadata, source: &Path, dest: &Path) -> bool {
    match (source.canonicalize(), dest.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Apply the source's modification and access times to `dest`
fn copy_times(metadata: &Metadata, dest: &Path) -> Result<()> {
    let mtime = filetime::FileTime::from_last_modification_time(metadata);
    let atime = filetime::FileTime::from_last_access_time(metadata);
    filetime::set_file_times(dest, atime, mtime).with_path(dest)
}

/// Create `dir` and any missing parents; an existing directory is fine
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await.with_path(dir)
}

/// [`copy_file`] without blocking the scheduler
pub async fn copy_with_metadata(source: PathBuf, dest: PathBuf) -> Result<u64> {
    let task_source = source.clone();
    tokio::task::spawn_blocking(move || copy_file(&task_source, &dest))
        .await
        .map_err(|e| {
            SorterError::TaskFailed(format!("copy of {} did not finish: {}", source.display(), e))
        })?
}

//! Fan-out of copy tasks
//!
//! One task per discovered file, no limit, all awaited before returning.
//! Outcomes are never inspected here; they only reach the log.

use crate::core::Copier;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Launches a copy task per path and waits for all of them
#[derive(Debug, Clone)]
pub struct Dispatcher {
    copier: Arc<Copier>,
}

impl Dispatcher {
    /// Create a dispatcher writing into `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            copier: Arc::new(Copier::new(output)),
        }
    }

    /// Copy every path, returning how many tasks ran to completion.
    ///
    /// Completion order is unspecified. A task that panics is logged and
    /// does not affect the others.
    pub async fn run<I>(&self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut tasks = JoinSet::new();

        for path in paths {
            let copier = Arc::clone(&self.copier);
            tasks.spawn(async move {
                copier.sort_file(path).await;
            });
        }

        let launched = tasks.len();
        tracing::debug!("Dispatched {} copy tasks", launched);

        let mut completed = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(()) => completed += 1,
                Err(e) => tracing::error!("Runtime error: {}", e),
            }
        }

        completed
    }
}

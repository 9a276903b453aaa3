//! Fan-out/fan-in coordination for the artifact pipeline.
//!
//! One tokio task is launched per input binary; the blocking three-step
//! sequence itself runs on the blocking pool. Each task reports exactly one
//! [`TaskResult`] on a shared channel, and the pipeline drains the channel
//! until every sender is gone, which is the completion barrier: the loop can
//! only end once all launched tasks have reported.

use crate::config::{host_platform, PublishConfig};
use crate::error::{PublishError, Result};
use crate::task::{create_update, TaskResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task;
use tracing::warn;

/// Counts of task outcomes for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Tasks that produced both manifest and archive.
    pub completed: usize,
    /// Tasks that failed at some step.
    pub failed: usize,
}

/// Run the artifact pipeline over every entry in `source_dir`.
///
/// Setup failures (uncreatable output root, unreadable source directory) are
/// returned as errors before any task launches. After that, every input gets
/// its own concurrently running task; per-task failures are reported on
/// `out` in arrival order, never aborting siblings, and are tallied in the
/// returned [`BatchSummary`]. Launched tasks are never cancelled.
pub async fn run(
    config: PublishConfig,
    source_dir: &Path,
    out: &mut dyn Write,
) -> Result<BatchSummary> {
    fs::create_dir_all(&config.output_dir).map_err(|source| PublishError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let inputs = list_inputs(source_dir)?;

    if let Some(fixed) = config.platform.as_deref() {
        if inputs.len() > 1 {
            warn!(
                platform = fixed,
                inputs = inputs.len(),
                "multiple inputs share one platform identifier; later artifacts overwrite earlier ones"
            );
        }
    }

    let limit = config
        .concurrency
        .map(|n| Arc::new(Semaphore::new(n.max(1))));
    let config = Arc::new(config);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let launched = inputs.len();
    for input in inputs {
        let platform = platform_for(&config, &input);
        let config = Arc::clone(&config);
        let limit = limit.clone();
        let tx = tx.clone();

        task::spawn(async move {
            let _permit = match limit {
                // The semaphore is never closed, so acquiring cannot fail.
                Some(semaphore) => Some(
                    semaphore
                        .acquire_owned()
                        .await
                        .expect("semaphore stays open"),
                ),
                None => None,
            };

            let worker_platform = platform.clone();
            let joined =
                task::spawn_blocking(move || create_update(&config, &input, &worker_platform))
                    .await;

            let result = match joined {
                Ok(Ok(())) => TaskResult::Completed(platform),
                Ok(Err(err)) => TaskResult::Failed(err),
                Err(err) => {
                    TaskResult::Failed(PublishError::Other(format!("task join error: {err}")))
                }
            };

            // The receiver outlives every sender; a send cannot fail.
            let _ = tx.send(result);
        });
    }
    drop(tx);

    let mut summary = BatchSummary::default();
    while let Some(result) = rx.recv().await {
        match result {
            TaskResult::Completed(platform) => {
                summary.completed += 1;
                let _ = writeln!(out, "Update created for platform: {platform}");
            }
            TaskResult::Failed(err) => {
                summary.failed += 1;
                let _ = writeln!(out, "Error: {err}");
            }
        }
    }
    debug_assert_eq!(summary.completed + summary.failed, launched);

    Ok(summary)
}

fn list_inputs(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(source_dir).map_err(|err| PublishError::read(source_dir, err))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| PublishError::read(source_dir, err))?;
        inputs.push(entry.path());
    }
    Ok(inputs)
}

/// Platform identifier for one input: the configured identifier when fixed,
/// otherwise the input's file stem.
fn platform_for(config: &PublishConfig, input: &Path) -> String {
    if let Some(platform) = &config.platform {
        return platform.clone();
    }

    input
        .file_stem()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(host_platform)
}

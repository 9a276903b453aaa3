use crate::archive::gzip_file;
use crate::config::PublishConfig;
use crate::digest::file_sha256;
use crate::error::{PublishError, Result};
use crate::manifest::ReleaseManifest;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of one artifact task, produced exactly once per task and
/// consumed exactly once by the pipeline.
#[derive(Debug)]
pub enum TaskResult {
    /// Every artifact for the platform was produced.
    Completed(String),
    /// A step failed; later steps were not attempted.
    Failed(PublishError),
}

/// Produce the release manifest and compressed archive for a single input
/// binary.
///
/// Steps run in order and short-circuit on the first error: checksum the
/// input, write the manifest, ensure the version directory exists, compress
/// the binary. Nothing is retried. A failure after the manifest is written
/// leaves it naming an archive that was never produced; the manifest is
/// only trusted together with a reported success.
///
/// Only paths derived from `platform` under `config.output_dir` are
/// touched, so concurrent tasks for distinct platforms never interfere.
pub fn create_update(config: &PublishConfig, input: &Path, platform: &str) -> Result<()> {
    let checksum = file_sha256(input)?;
    debug!(platform, %checksum, "checksum computed");

    let manifest = ReleaseManifest::new(&config.version, checksum);
    manifest.write(&config.manifest_path(platform))?;

    let archive_dir = config.archive_dir();
    fs::create_dir_all(&archive_dir).map_err(|source| PublishError::CreateDir {
        path: archive_dir.clone(),
        source,
    })?;

    gzip_file(input, &config.archive_path(platform))?;
    debug!(platform, "artifacts written");

    Ok(())
}

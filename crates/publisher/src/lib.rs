//! Update-artifact generation for the self-update mechanism.
//!
//! This crate takes a directory of built application binaries (one per target
//! platform) and a version label, and produces for each binary the three
//! artefacts the update client consumes: a SHA-256 content checksum, a small
//! JSON manifest announcing the "current" release, and a gzip-compressed copy
//! of the binary stored under a version-scoped directory. All binaries are
//! processed concurrently; every task reports exactly one outcome, and the
//! pipeline only returns once all of them have.
//!
//! ```ignore
//! use publisher::{pipeline, PublishConfig};
//! use std::path::Path;
//!
//! # async fn demo() -> publisher::Result<()> {
//! let config = PublishConfig {
//!     version: "1.2.0".into(),
//!     output_dir: "public".into(),
//!     platform: None,
//!     concurrency: None,
//! };
//!
//! let summary = pipeline::run(config, Path::new("dist"), &mut std::io::stdout()).await?;
//! println!("{} created, {} failed", summary.completed, summary.failed);
//! # Ok(())
//! # }
//! ```

mod archive;
mod config;
mod digest;
mod error;
mod manifest;
mod task;

pub mod pipeline;

pub use archive::gzip_file;
pub use config::{host_platform, PublishConfig};
pub use digest::file_sha256;
pub use error::{PublishError, Result};
pub use manifest::ReleaseManifest;
pub use pipeline::BatchSummary;
pub use task::{create_update, TaskResult};

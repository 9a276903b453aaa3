use crate::error::{PublishError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io;
use std::path::Path;

/// Compress the file at `src` into a gzip archive at `dst`.
///
/// Both sides are streamed in a single linear pass; decompressing the
/// archive reproduces the source bytes exactly. `dst` is created or
/// truncated, and its parent directory must already exist. On failure the
/// destination may be partially written; only a returned `Ok` means the
/// archive is complete.
pub fn gzip_file(src: &Path, dst: &Path) -> Result<()> {
    let mut input = File::open(src).map_err(|err| PublishError::read(src, err))?;

    let output = File::create(dst).map_err(|err| archive_error(dst, err))?;
    let mut encoder = GzEncoder::new(output, Compression::default());

    io::copy(&mut input, &mut encoder).map_err(|err| archive_error(dst, err))?;
    encoder.finish().map_err(|err| archive_error(dst, err))?;

    Ok(())
}

fn archive_error(dst: &Path, source: std::io::Error) -> PublishError {
    PublishError::WriteArchive {
        path: dst.to_path_buf(),
        source,
    }
}

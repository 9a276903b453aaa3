use crate::error::{PublishError, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Compute the SHA-256 digest of the file at `path`.
///
/// The file is streamed through the hasher in a single linear pass, so
/// arbitrarily large binaries never need to fit in memory. The digest is
/// returned as a lowercase hex string. The checksum always covers the raw
/// bytes of the input, never a compressed representation.
pub fn file_sha256(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|err| PublishError::read(path, err))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|err| PublishError::read(path, err))?;

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn digest_matches_known_vector() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary");
        fs::write(&path, b"abc").unwrap();

        let digest = file_sha256(&path).expect("digest succeeds");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_file_has_empty_string_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, b"").unwrap();

        let digest = file_sha256(&path).expect("digest succeeds");
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn missing_file_reports_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let err = file_sha256(&path).expect_err("open must fail");
        match err {
            PublishError::ReadSource { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}

use crate::error::{PublishError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The "current release" record consumed by the self-update client.
///
/// Field order is fixed (`version` before `sha256`) so that manifests for
/// successive releases diff cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseManifest {
    /// Version label for the release.
    pub version: String,
    /// SHA-256 digest (hex encoded, lowercase) of the uncompressed binary.
    pub sha256: String,
}

impl ReleaseManifest {
    /// Create a manifest for one release.
    pub fn new(version: impl Into<String>, sha256: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sha256: sha256.into(),
        }
    }

    /// Write the manifest as pretty-printed JSON (four-space indent) to
    /// `path`, creating or overwriting the file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|err| manifest_error(path, err))?;

        {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);
            self.serialize(&mut serializer)?;
        }
        file.write_all(b"\n").map_err(|err| manifest_error(path, err))?;

        Ok(())
    }
}

fn manifest_error(path: &Path, source: std::io::Error) -> PublishError {
    PublishError::WriteManifest {
        path: path.to_path_buf(),
        source,
    }
}

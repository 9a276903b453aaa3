use std::path::PathBuf;

/// Immutable settings for one publisher invocation.
///
/// Built once at startup and shared read-only with every artifact task, so
/// tasks carry no ambient state and can be exercised in isolation.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Version label written to every manifest; also names the archive
    /// subdirectory.
    pub version: String,
    /// Root directory update artifacts are written under.
    pub output_dir: PathBuf,
    /// Fixed platform identifier applied to every input. `None` derives the
    /// identifier from each input file's name instead.
    pub platform: Option<String>,
    /// Maximum number of artifact tasks running at once. `None` launches
    /// every task immediately with no cap.
    pub concurrency: Option<usize>,
}

impl PublishConfig {
    /// Manifest path for `platform`: `<output_dir>/<platform>.json`.
    pub fn manifest_path(&self, platform: &str) -> PathBuf {
        self.output_dir.join(format!("{platform}.json"))
    }

    /// Version-scoped directory archives are written into.
    pub fn archive_dir(&self) -> PathBuf {
        self.output_dir.join(&self.version)
    }

    /// Archive path for `platform`: `<output_dir>/<version>/<platform>.gz`.
    pub fn archive_path(&self, platform: &str) -> PathBuf {
        self.archive_dir().join(format!("{platform}.gz"))
    }
}

/// Platform identifier for the running environment, in `<os>-<arch>` form.
pub fn host_platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

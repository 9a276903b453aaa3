use anyhow::Result;
use clap::Parser;
use publisher::{host_platform, pipeline, PublishConfig};
use std::io;
use std::path::PathBuf;

/// Generate self-update artifacts for every binary in a directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing one built binary per target platform
    source_dir: PathBuf,

    /// Version label written to every manifest
    version: String,

    /// Output directory for writing updates
    #[arg(short, long, default_value = "public")]
    output: PathBuf,

    /// Target platform in the form OS-ARCH, applied to every input.
    /// `--platform` alone uses the running environment; when the option is
    /// omitted each input file's name is taken as its platform.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = host_platform())]
    platform: Option<String>,

    /// Maximum number of artifact tasks running at once (default: unbounded)
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = PublishConfig {
        version: cli.version,
        output_dir: cli.output,
        platform: cli.platform,
        concurrency: cli.concurrency,
    };

    // Setup errors abort with a non-zero status; individual task failures
    // have already been reported line by line and leave the exit code alone.
    let summary = pipeline::run(config, &cli.source_dir, &mut io::stdout()).await?;

    if summary.failed > 0 {
        tracing::warn!(
            completed = summary.completed,
            failed = summary.failed,
            "some update artifacts were not produced"
        );
    }

    Ok(())
}

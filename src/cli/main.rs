//! CLI binary entry point for hugo-wxr

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use hugo_wxr::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "hugo-wxr")]
#[command(about = "Convert Hugo content to WordPress WXR format.")]
#[command(version)]
#[command(after_help = "ENVIRONMENT:
    HUGO_WXR_CREATOR    Author written to dc:creator (default: admin)
    HUGO_WXR_GUID       Prefix for item GUIDs (default: http://example.com/)
    RUST_LOG            Log filter for diagnostics on stderr (default: warn)")]
struct Cli {
    /// Path to the Hugo content directory
    content_dir: PathBuf,
}

/// Initialise tracing-based logging on stderr
///
/// Uses `RUST_LOG` if set, otherwise only warnings (one per skipped file) and errors.
#[cfg(feature = "cli")]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging();

    let args = ConvertArgs {
        content_dir: cli.content_dir,
    };

    if let Err(e) = handle_convert(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}

//! Convert command handler

use crate::cli::error::CliError;
use crate::config::WxrConfig;
use crate::convert::HugoConverter;
use crate::export::WXRExporter;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Hugo content directory
    pub content_dir: PathBuf,
}

/// Build the WXR document for the content directory
///
/// Configuration comes from `<content_dir>/.hugo-wxr.toml` (if present) with
/// `HUGO_WXR_CREATOR` / `HUGO_WXR_GUID` taking precedence.
pub fn run_convert(args: &ConvertArgs) -> Result<String, CliError> {
    let config = WxrConfig::load(&args.content_dir)?;
    tracing::debug!(
        "Exporting as creator '{}' with GUID base '{}'",
        config.creator,
        config.guid_base
    );

    let converter = HugoConverter::new(WXRExporter::new(config));
    Ok(converter.export_directory(&args.content_dir)?)
}

/// Handle the convert command, writing the document to stdout
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    let document = run_convert(args)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(document.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(|e| CliError::OutputError(e.to_string()))
}

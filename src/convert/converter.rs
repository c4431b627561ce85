//! Hugo to WXR converter
//!
//! Runs every discovered content file through the reader and the exporter.
//! Each file ends up as a [`FileOutcome`]; failures are logged and skipped so
//! one bad file never stops the run.

use crate::export::{ExportError, WXRExporter};
use crate::import::{
    CommonMarkRenderer, ContentReader, FrontMatterParser, ImportError, LineFrontMatterParser,
    MarkdownRenderer, discover_content_files,
};
use crate::models::ExportItem;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Failure while processing a single content file
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Whole-run failure
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

/// A content file that was skipped, with the reason
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: FileError,
}

/// Result of processing one content file
#[derive(Debug)]
pub enum FileOutcome {
    Converted(ExportItem),
    Failed(FileFailure),
}

/// Items and failures from a conversion run, both in discovery order
#[derive(Debug, Default)]
#[must_use = "conversion reports carry the converted items and skipped files"]
pub struct ConversionReport {
    pub items: Vec<ExportItem>,
    pub failures: Vec<FileFailure>,
}

impl ConversionReport {
    /// Partition outcomes into items and failures
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = FileOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Converted(item) => report.items.push(item),
                FileOutcome::Failed(failure) => report.failures.push(failure),
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Composes a [`ContentReader`] with a [`WXRExporter`]
#[derive(Debug, Clone)]
pub struct HugoConverter<P = LineFrontMatterParser, R = CommonMarkRenderer> {
    reader: ContentReader<P, R>,
    exporter: WXRExporter,
}

impl HugoConverter {
    /// Converter with the default reader
    pub fn new(exporter: WXRExporter) -> Self {
        Self {
            reader: ContentReader::new(),
            exporter,
        }
    }
}

impl<P: FrontMatterParser, R: MarkdownRenderer> HugoConverter<P, R> {
    pub fn with_reader(reader: ContentReader<P, R>, exporter: WXRExporter) -> Self {
        Self { reader, exporter }
    }

    pub fn exporter(&self) -> &WXRExporter {
        &self.exporter
    }

    /// Process one file into an outcome
    pub fn convert_file(&self, path: &Path) -> FileOutcome {
        let result = self
            .reader
            .read(path)
            .map_err(FileError::from)
            .and_then(|document| {
                self.exporter
                    .export_document(&document)
                    .map_err(FileError::from)
            });

        match result {
            Ok(item) => FileOutcome::Converted(item),
            Err(error) => FileOutcome::Failed(FileFailure {
                path: path.to_path_buf(),
                error,
            }),
        }
    }

    /// Process files in order, logging one warning per skipped file
    pub fn convert_files(&self, paths: &[PathBuf]) -> ConversionReport {
        let report = ConversionReport::from_outcomes(paths.iter().map(|path| {
            let outcome = self.convert_file(path);
            if let FileOutcome::Failed(failure) = &outcome {
                warn!(
                    "Error processing file {}: {}",
                    failure.path.display(),
                    failure.error
                );
            }
            outcome
        }));

        info!(
            "Converted {} files, skipped {}",
            report.items.len(),
            report.failures.len()
        );

        report
    }

    /// Discover and process every content file below `root`
    pub fn convert_directory(&self, root: &Path) -> Result<ConversionReport, ConversionError> {
        let paths = discover_content_files(root)?;
        Ok(self.convert_files(&paths))
    }

    /// Discover, process and serialize a content directory into a WXR document
    pub fn export_directory(&self, root: &Path) -> Result<String, ConversionError> {
        let report = self.convert_directory(root)?;
        Ok(self.exporter.build_document(&report.items)?)
    }
}

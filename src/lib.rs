//! Hugo to WordPress WXR converter
//!
//! Provides:
//! - Content discovery and front matter parsing for Hugo content trees
//! - Markdown rendering to HTML
//! - WordPress eXtended RSS (WXR) item and document export
//! - A conversion pipeline with explicit per-file outcomes
//!
//! # Example
//!
//! ```no_run
//! use hugo_wxr::{HugoConverter, WXRExporter, WxrConfig};
//! use std::path::Path;
//!
//! let converter = HugoConverter::new(WXRExporter::new(WxrConfig::default()));
//! let xml = converter.export_directory(Path::new("content")).unwrap();
//! println!("{}", xml);
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigError, WxrConfig};
pub use convert::{ConversionError, ConversionReport, FileOutcome, HugoConverter};
pub use export::{ExportError, WXRExporter, build_guid};
pub use import::{
    CommonMarkRenderer, ContentReader, FrontMatterParser, ImportError, LineFrontMatterParser,
    MarkdownRenderer, YamlFrontMatterParser,
};
pub use models::{ContentDocument, ExportItem, FrontMatter, FrontMatterValue};

//! Import functionality
//!
//! Reads a Hugo content tree:
//! - Discovery of `*.md` files below a content directory
//! - Front matter splitting and parsing (line-based or YAML)
//! - Markdown body rendering to HTML

pub mod content;
pub mod discover;
pub mod front_matter;
pub mod markdown;

use std::path::PathBuf;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Content directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("Invalid content pattern: {0}")]
    InvalidPattern(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Malformed content: {0}")]
    MalformedContent(String),
    #[error("Front matter error: {0}")]
    FrontMatterError(String),
}

// Re-export for convenience
pub use content::ContentReader;
pub use discover::discover_content_files;
pub use front_matter::{
    FrontMatterParser, LineFrontMatterParser, YamlFrontMatterParser, split_document,
};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};

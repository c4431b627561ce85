//! Parsed content file

use super::front_matter::FrontMatter;
use std::path::PathBuf;

/// A content file after front matter parsing and markdown rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDocument {
    /// Path the file was read from (as discovered, not canonicalized)
    pub path: PathBuf,
    /// Header metadata
    pub front_matter: FrontMatter,
    /// Body rendered to HTML
    pub html: String,
}

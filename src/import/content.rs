//! Content file reader
//!
//! Reads a markdown content file, splits off its front matter and renders the
//! body to HTML.

use super::ImportError;
use super::front_matter::{FrontMatterParser, LineFrontMatterParser, split_document};
use super::markdown::{CommonMarkRenderer, MarkdownRenderer};
use crate::models::ContentDocument;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Content reader parameterized over the front matter parser and markdown renderer
#[derive(Debug, Clone, Default)]
pub struct ContentReader<P = LineFrontMatterParser, R = CommonMarkRenderer> {
    parser: P,
    renderer: R,
}

impl ContentReader {
    /// Reader using the line-based front matter parser and CommonMark rendering
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: FrontMatterParser, R: MarkdownRenderer> ContentReader<P, R> {
    /// Reader with custom collaborators
    pub fn with_parts(parser: P, renderer: R) -> Self {
        Self { parser, renderer }
    }

    /// Read and parse a content file from disk
    pub fn read(&self, path: &Path) -> Result<ContentDocument, ImportError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ImportError::IoError(format!("Failed to read file: {}", e)))?;
        self.parse(path, &text)
    }

    /// Parse already loaded file content
    ///
    /// `path` is only recorded on the resulting document. A leading UTF-8 byte
    /// order mark is dropped so the opening delimiter starts the first line.
    pub fn parse(&self, path: &Path, text: &str) -> Result<ContentDocument, ImportError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let (block, body) = split_document(text).ok_or_else(|| {
            ImportError::MalformedContent(
                "expected front matter enclosed by two '---' lines".to_string(),
            )
        })?;

        let front_matter = self.parser.parse(block)?;
        let html = self.renderer.render(body);

        tracing::debug!(
            "Parsed {} ({} front matter keys, {} bytes of HTML)",
            path.display(),
            front_matter.len(),
            html.len()
        );

        Ok(ContentDocument {
            path: path.to_path_buf(),
            front_matter,
            html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::front_matter::YamlFrontMatterParser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "---\ntitle: X\ndate: \"2024-01-02 10:00:00 +0000\"\ncategories: [Y]\n---\n# Hi\n";

    #[test]
    fn test_parse_sample() {
        let doc = ContentReader::new()
            .parse(Path::new("content/post.md"), SAMPLE)
            .unwrap();

        assert_eq!(doc.path, Path::new("content/post.md"));
        assert_eq!(doc.front_matter.text("title"), Some("X"));
        assert_eq!(doc.front_matter.text("date"), Some("2024-01-02 10:00:00 +0000"));
        assert_eq!(doc.front_matter.list("categories"), vec!["Y"]);
        assert_eq!(doc.html.trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_parse_missing_closing_delimiter() {
        let result = ContentReader::new().parse(Path::new("broken.md"), "---\ntitle: X\n# Hi\n");
        assert!(matches!(result, Err(ImportError::MalformedContent(_))));
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let text = format!("\u{feff}{}", SAMPLE);
        let doc = ContentReader::new()
            .parse(Path::new("bom.md"), &text)
            .unwrap();
        assert_eq!(doc.front_matter.text("title"), Some("X"));
        assert_eq!(doc.html.trim(), "<h1>Hi</h1>");
    }

    #[test]
    fn test_parse_byte_order_mark_with_body_rule() {
        let text = format!("\u{feff}{}\n---\n\nmore\n", SAMPLE);
        let doc = ContentReader::new()
            .parse(Path::new("bom.md"), &text)
            .unwrap();
        assert_eq!(doc.front_matter.text("date"), Some("2024-01-02 10:00:00 +0000"));
        assert!(doc.html.contains("<h1>Hi</h1>"));
        assert!(doc.html.contains("<hr />"));
        assert!(doc.html.contains("<p>more</p>"));
    }

    #[test]
    fn test_parse_with_yaml_parser() {
        let reader = ContentReader::with_parts(YamlFrontMatterParser::new(), CommonMarkRenderer::new());
        let doc = reader.parse(Path::new("post.md"), SAMPLE).unwrap();
        assert_eq!(doc.front_matter.list("categories"), vec!["Y"]);
    }

    #[test]
    fn test_parse_with_custom_renderer() {
        struct Shouting;
        impl MarkdownRenderer for Shouting {
            fn render(&self, markdown: &str) -> String {
                markdown.to_uppercase()
            }
        }

        let reader = ContentReader::with_parts(LineFrontMatterParser::new(), Shouting);
        let doc = reader.parse(Path::new("post.md"), SAMPLE).unwrap();
        assert_eq!(doc.html, "# HI\n");
    }

    #[test]
    fn test_read_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        file.flush().unwrap();

        let doc = ContentReader::new().read(file.path()).unwrap();
        assert_eq!(doc.front_matter.text("title"), Some("X"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        file.flush().unwrap();

        let result = ContentReader::new().read(file.path());
        assert!(matches!(result, Err(ImportError::IoError(_))));
    }
}

//! Markdown to HTML rendering

use pulldown_cmark::{Options, Parser, html};

/// Renders a markdown body to HTML
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by pulldown-cmark
///
/// Enables the GitHub-flavoured extensions Hugo sites commonly rely on:
/// tables, footnotes, strikethrough and task lists.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with an explicit option set
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

//! WXR export item

/// One `<item>` of the WXR document
///
/// Every field is already in its final textual form; the exporter only has to
/// write them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    /// Post title
    pub title: String,
    /// Publication date in RFC 2822 style (e.g., `Tue, 02 Jan 2024 10:00:00 +0000`)
    pub pub_date: String,
    /// Author login written to `dc:creator`
    pub creator: String,
    /// Non-permalink GUID: configured base followed by a SHA-256 hex digest
    pub guid: String,
    /// Rendered HTML body written to `content:encoded`
    pub content: String,
    /// Single category
    pub category: String,
}

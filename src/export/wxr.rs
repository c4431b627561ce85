//! WXR exporter
//!
//! Builds WordPress eXtended RSS items from parsed content files and writes
//! them into a complete `rss > channel` document.

use super::ExportError;
use super::guid::build_guid;
use crate::config::WxrConfig;
use crate::models::{ContentDocument, ExportItem, FrontMatter};
use chrono::DateTime;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Front matter date layout, e.g. `2024-01-02 10:00:00 +0000`
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// RSS `pubDate` layout, e.g. `Tue, 02 Jan 2024 10:00:00 +0000`
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

pub const NS_CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_WP: &str = "http://wordpress.org/export/1.2/";

const INDENT_SIZE: usize = 3;

/// WXR Exporter
///
/// Holds the configuration every item shares (creator and GUID base).
#[derive(Debug, Clone, Default)]
pub struct WXRExporter {
    config: WxrConfig,
}

impl WXRExporter {
    /// Create a new WXRExporter
    pub fn new(config: WxrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WxrConfig {
        &self.config
    }

    /// Build the export item for a parsed content document
    pub fn export_document(&self, document: &ContentDocument) -> Result<ExportItem, ExportError> {
        self.build_item(&document.front_matter, &document.html, &document.path)
    }

    /// Build one export item
    ///
    /// # Arguments
    ///
    /// * `front_matter` - Metadata of the content file
    /// * `html` - Rendered body
    /// * `path` - Path the file was discovered at (feeds the GUID)
    ///
    /// # Returns
    ///
    /// The item, or `MissingDate` / `DateFormatError` when the `date` key is
    /// absent or does not match `YYYY-MM-DD HH:MM:SS ±HHMM`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hugo_wxr::config::WxrConfig;
    /// use hugo_wxr::export::WXRExporter;
    /// use hugo_wxr::models::FrontMatter;
    /// use std::path::Path;
    ///
    /// let exporter = WXRExporter::new(WxrConfig::default());
    /// let front_matter = FrontMatter::new()
    ///     .with("title", "Hello")
    ///     .with("date", "2024-01-02 10:00:00 +0000");
    /// let item = exporter
    ///     .build_item(&front_matter, "<p>Hi</p>", Path::new("content/hello.md"))
    ///     .unwrap();
    /// assert_eq!(item.pub_date, "Tue, 02 Jan 2024 10:00:00 +0000");
    /// assert_eq!(item.category, "Uncategorized");
    /// ```
    pub fn build_item(
        &self,
        front_matter: &FrontMatter,
        html: &str,
        path: &Path,
    ) -> Result<ExportItem, ExportError> {
        let date = front_matter.text("date").ok_or(ExportError::MissingDate)?;
        let pub_date = format_pub_date(date)?;

        let title = front_matter.text("title").unwrap_or(DEFAULT_TITLE);
        let category = front_matter
            .list("categories")
            .first()
            .copied()
            .unwrap_or(DEFAULT_CATEGORY);

        Ok(ExportItem {
            title: title.to_string(),
            pub_date,
            creator: self.config.creator.clone(),
            guid: format!("{}{}", self.config.guid_base, build_guid(path, date)),
            content: html.to_string(),
            category: category.to_string(),
        })
    }

    /// Serialize items into a complete, pretty-printed WXR document
    pub fn build_document(&self, items: &[ExportItem]) -> Result<String, ExportError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(serialization_error)?;

        let rss = BytesStart::new("rss").with_attributes([
            ("version", "2.0"),
            ("xmlns:content", NS_CONTENT),
            ("xmlns:dc", NS_DC),
            ("xmlns:wp", NS_WP),
        ]);
        writer
            .write_event(Event::Start(rss))
            .map_err(serialization_error)?;
        writer
            .write_event(Event::Start(BytesStart::new("channel")))
            .map_err(serialization_error)?;

        for item in items {
            write_item(&mut writer, item)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("channel")))
            .map_err(serialization_error)?;
        writer
            .write_event(Event::End(BytesEnd::new("rss")))
            .map_err(serialization_error)?;

        let mut xml = String::from_utf8(writer.into_inner().into_inner())
            .map_err(serialization_error)?;
        xml.push('\n');
        Ok(xml)
    }
}

/// Reformat a front matter date as an RSS `pubDate`
pub fn format_pub_date(raw: &str) -> Result<String, ExportError> {
    let parsed = DateTime::parse_from_str(raw, INPUT_DATE_FORMAT).map_err(|e| {
        ExportError::DateFormatError(format!(
            "'{}' does not match {}: {}",
            raw, INPUT_DATE_FORMAT, e
        ))
    })?;
    Ok(parsed.format(PUB_DATE_FORMAT).to_string())
}

/// Wrap HTML in CDATA, splitting any `]]>` across adjacent sections
fn cdata(html: &str) -> String {
    format!(
        "<![CDATA[{}]]>",
        xml_chars(html).replace("]]>", "]]]]><![CDATA[>")
    )
}

/// Characters allowed by the XML 1.0 `Char` production
///
/// Surrogates cannot occur in a `char`, so only C0 controls other than
/// tab/LF/CR and the two noncharacters U+FFFE and U+FFFF are excluded.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

/// Drop characters that cannot appear anywhere in an XML 1.0 document
fn xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    debug!(
        "Dropped {} characters not allowed in XML",
        text.chars().count() - cleaned.chars().count()
    );
    Cow::Owned(cleaned)
}

fn write_item<W: std::io::Write>(
    writer: &mut Writer<W>,
    item: &ExportItem,
) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new("item")))
        .map_err(serialization_error)?;

    write_text_element(writer, BytesStart::new("title"), &item.title)?;
    write_text_element(writer, BytesStart::new("pubDate"), &item.pub_date)?;
    write_text_element(writer, BytesStart::new("dc:creator"), &item.creator)?;
    write_text_element(
        writer,
        BytesStart::new("guid").with_attributes([("isPermaLink", "false")]),
        &item.guid,
    )?;

    // Pre-escaped text keeps the CDATA section on the same line as its tags
    writer
        .write_event(Event::Start(BytesStart::new("content:encoded")))
        .map_err(serialization_error)?;
    writer
        .write_event(Event::Text(BytesText::from_escaped(cdata(&item.content))))
        .map_err(serialization_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("content:encoded")))
        .map_err(serialization_error)?;

    write_text_element(writer, BytesStart::new("category"), &item.category)?;

    writer
        .write_event(Event::End(BytesEnd::new("item")))
        .map_err(serialization_error)?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> Result<(), ExportError> {
    let end = start.to_end().into_owned();
    writer
        .write_event(Event::Start(start))
        .map_err(serialization_error)?;
    writer
        .write_event(Event::Text(BytesText::new(&xml_chars(text))))
        .map_err(serialization_error)?;
    writer
        .write_event(Event::End(end))
        .map_err(serialization_error)?;
    Ok(())
}

fn serialization_error<E: Display>(e: E) -> ExportError {
    ExportError::SerializationError(e.to_string())
}

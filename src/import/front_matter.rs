//! Front matter splitting and parsing
//!
//! A content file looks like:
//!
//! ```text
//! [optional preamble]
//! ---
//! title: Hello
//! date: "2024-01-02 10:00:00 +0000"
//! categories: [Travel]
//! ---
//! # Markdown body
//! ```
//!
//! Only the first two `---` lines partition the document; later ones belong to
//! the body (e.g., markdown horizontal rules).

use super::ImportError;
use crate::models::{FrontMatter, FrontMatterValue};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^---[ \t]*(?:\r?\n|$)").expect("Invalid regex"));

/// Split a document into its front matter block and its body
///
/// Returns `None` when fewer than two delimiter lines are present.
pub fn split_document(text: &str) -> Option<(&str, &str)> {
    let mut delimiters = RE_DELIMITER.find_iter(text);
    let open = delimiters.next()?;
    let close = delimiters.next()?;
    Some((&text[open.end()..close.start()], &text[close.end()..]))
}

/// Turns a raw front matter block into key/value metadata
pub trait FrontMatterParser {
    fn parse(&self, block: &str) -> Result<FrontMatter, ImportError>;
}

/// Front matter key whose value is read as a list
pub const CATEGORIES_KEY: &str = "categories";

/// Line-oriented `key: value` parser
///
/// Parsing rules:
/// - Lines containing `": "` split at the first occurrence; key and value are trimmed
/// - Values wrapped in matching quotes are unquoted
/// - For list keys only, `[a, b]` values are parsed as YAML flow sequences and
///   `key:` followed by `- item` lines collects a block sequence
/// - Every other value is kept as text, so `title: [WIP]` stays `[WIP]`
/// - Anything else is ignored
#[derive(Debug, Clone)]
pub struct LineFrontMatterParser {
    list_keys: Vec<String>,
}

impl Default for LineFrontMatterParser {
    fn default() -> Self {
        Self {
            list_keys: vec![CATEGORIES_KEY.to_string()],
        }
    }
}

impl LineFrontMatterParser {
    /// Parser treating only `categories` as list-valued
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of list-valued keys
    pub fn with_list_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn list_keys(&self) -> &[String] {
        &self.list_keys
    }

    fn is_list_key(&self, key: &str) -> bool {
        self.list_keys.iter().any(|k| k == key)
    }
}

impl FrontMatterParser for LineFrontMatterParser {
    fn parse(&self, block: &str) -> Result<FrontMatter, ImportError> {
        let mut front_matter = FrontMatter::new();
        let mut pending: Option<(String, Vec<String>)> = None;

        for line in block.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some((_, items)) = pending.as_mut()
                && let Some(item) = sequence_item(line)
            {
                items.push(item);
                continue;
            }

            if let Some((key, items)) = pending.take()
                && !items.is_empty()
            {
                front_matter.insert(key, items);
            }

            if let Some((key, value)) = line.split_once(": ") {
                let key = key.trim();
                let value = value.trim();
                if self.is_list_key(key) {
                    front_matter.insert(key, parse_list_value(value));
                } else {
                    front_matter.insert(key, unquote(value));
                }
            } else if let Some(key) = sequence_header(line)
                && self.is_list_key(key)
            {
                pending = Some((key.to_string(), Vec::new()));
            }
        }

        if let Some((key, items)) = pending
            && !items.is_empty()
        {
            front_matter.insert(key, items);
        }

        Ok(front_matter)
    }
}

/// Full YAML parser for front matter blocks
///
/// Scalars become text, sequences of scalars become lists, nested mappings are
/// skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlFrontMatterParser;

impl YamlFrontMatterParser {
    pub fn new() -> Self {
        Self
    }
}

impl FrontMatterParser for YamlFrontMatterParser {
    fn parse(&self, block: &str) -> Result<FrontMatter, ImportError> {
        let mut front_matter = FrontMatter::new();
        if block.trim().is_empty() {
            return Ok(front_matter);
        }

        let document: serde_yaml::Value = serde_yaml::from_str(block)
            .map_err(|e| ImportError::FrontMatterError(format!("Invalid YAML: {}", e)))?;

        let mapping = match document {
            serde_yaml::Value::Mapping(mapping) => mapping,
            serde_yaml::Value::Null => return Ok(front_matter),
            _ => {
                return Err(ImportError::FrontMatterError(
                    "Front matter is not a mapping".to_string(),
                ));
            }
        };

        for (key, value) in mapping {
            let Some(key) = scalar_to_string(&key) else {
                tracing::debug!("Skipping non-scalar front matter key: {:?}", key);
                continue;
            };
            match value {
                serde_yaml::Value::Sequence(items) => {
                    let items: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
                    front_matter.insert(key, items);
                }
                other => match scalar_to_string(&other) {
                    Some(text) => front_matter.insert(key, FrontMatterValue::Text(text)),
                    None => tracing::debug!("Skipping structured front matter value for '{}'", key),
                },
            }
        }

        Ok(front_matter)
    }
}

fn parse_list_value(value: &str) -> FrontMatterValue {
    if value.starts_with('[') && value.ends_with(']') {
        match serde_yaml::from_str::<Vec<serde_yaml::Value>>(value) {
            Ok(items) => {
                return FrontMatterValue::List(items.iter().filter_map(scalar_to_string).collect());
            }
            Err(e) => {
                tracing::debug!("Treating '{}' as text, not a sequence: {}", value, e);
            }
        }
    }
    FrontMatterValue::Text(unquote(value).to_string())
}

/// `categories:` with nothing after the colon opens a block sequence
fn sequence_header(line: &str) -> Option<&str> {
    let key = line.trim_end().strip_suffix(':')?.trim();
    if key.is_empty() || key.contains(':') {
        None
    } else {
        Some(key)
    }
}

fn sequence_item(line: &str) -> Option<String> {
    let item = line.trim().strip_prefix("- ")?;
    Some(unquote(item.trim()).to_string())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

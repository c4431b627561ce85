//! Front matter metadata
//!
//! Front matter values are either a plain scalar or a sequence of strings:
//! - Text: `title: Hello`
//! - List: `categories: [Go, Rust]` or a YAML block sequence

/// A single front matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterValue {
    /// Scalar value (e.g., `title: Hello`)
    Text(String),
    /// Sequence value (e.g., `categories: [Go, Rust]`)
    List(Vec<String>),
}

impl FrontMatterValue {
    /// Scalar view of the value
    ///
    /// Lists have no scalar form and return `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FrontMatterValue::Text(text) => Some(text),
            FrontMatterValue::List(_) => None,
        }
    }

    /// Sequence view of the value
    ///
    /// A scalar is treated as a single-element sequence so callers that expect
    /// a list never have to special-case plain strings.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            FrontMatterValue::Text(text) => vec![text.as_str()],
            FrontMatterValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(value: &str) -> Self {
        FrontMatterValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FrontMatterValue {
    fn from(items: Vec<String>) -> Self {
        FrontMatterValue::List(items)
    }
}

/// Ordered key/value metadata parsed from a content file header
///
/// Keys keep the order in which they first appeared. Setting a key that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    /// Create an empty front matter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FrontMatterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert, mostly useful in tests
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FrontMatterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Look up a scalar value
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontMatterValue::as_text)
    }

    /// Look up a value as a sequence; missing keys yield an empty list
    pub fn list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(FrontMatterValue::as_list)
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatterValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut fm = FrontMatter::new();
        fm.insert("title", "First");
        fm.insert("date", "2024-01-02 10:00:00 +0000");
        fm.insert("title", "Second");

        assert_eq!(fm.len(), 2);
        assert_eq!(fm.text("title"), Some("Second"));
        let keys: Vec<&str> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "date"]);
    }

    #[test]
    fn test_scalar_reads_as_single_element_list() {
        let fm = FrontMatter::new().with("categories", "Travel");
        assert_eq!(fm.list("categories"), vec!["Travel"]);
    }

    #[test]
    fn test_list_has_no_text_view() {
        let fm = FrontMatter::new().with("categories", vec!["A".to_string(), "B".to_string()]);
        assert_eq!(fm.text("categories"), None);
        assert_eq!(fm.list("categories"), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_key() {
        let fm = FrontMatter::new();
        assert!(fm.is_empty());
        assert!(!fm.contains_key("title"));
        assert!(fm.list("categories").is_empty());
    }
}

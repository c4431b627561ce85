//! Export functionality
//!
//! Provides the WordPress eXtended RSS (WXR) exporter:
//! - Item construction from front matter and rendered HTML
//! - Deterministic, content-derived GUIDs
//! - Document serialization with the `content`, `dc` and `wp` namespaces

pub mod guid;
pub mod wxr;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Missing required front matter field: date")]
    MissingDate,
    #[error("Date format error: {0}")]
    DateFormatError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use guid::build_guid;
pub use wxr::{WXRExporter, format_pub_date};

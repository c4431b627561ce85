//! Models module
//!
//! Defines the data structures passed between the content reader and the WXR
//! exporter.

pub mod content;
pub mod front_matter;
pub mod item;

pub use content::ContentDocument;
pub use front_matter::{FrontMatter, FrontMatterValue};
pub use item::ExportItem;

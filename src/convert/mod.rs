//! Content conversion module
//!
//! Provides the end-to-end pipeline from a Hugo content directory to a WXR
//! document, with explicit per-file outcomes.

pub mod converter;

pub use converter::{
    ConversionError, ConversionReport, FileError, FileFailure, FileOutcome, HugoConverter,
};

//! Deterministic item GUIDs

use sha2::{Digest, Sha256};
use std::path::Path;

/// Content-derived identifier for an item
///
/// SHA-256 over `"{path}-{date}"`, where `date` is the value exactly as it
/// appeared in front matter. The same pair always yields the same 64
/// character lowercase hex string.
pub fn build_guid(path: &Path, date: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.display().to_string().as_bytes());
    hasher.update(b"-");
    hasher.update(date.as_bytes());
    format!("{:x}", hasher.finalize())
}

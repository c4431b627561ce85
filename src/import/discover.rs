//! Content file discovery

use super::ImportError;
use glob::Pattern;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Recursively find every `*.md` file below `root`
///
/// Hidden files and directories (leading `.`) are skipped. The order is the
/// order the glob walker yields, which follows directory enumeration.
pub fn discover_content_files(root: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !root.is_dir() {
        return Err(ImportError::RootNotFound(root.to_path_buf()));
    }

    let pattern = content_pattern(root);
    let entries = glob::glob(&pattern)
        .map_err(|e| ImportError::InvalidPattern(format!("{}: {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if is_hidden(root, &path) => {
                debug!("Skipping hidden entry {}", path.display())
            }
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!("Skipping non-file entry {}", path.display()),
            Err(e) => warn!("Failed to read entry below {}: {}", root.display(), e),
        }
    }

    info!(
        "Discovered {} content files under {}",
        files.len(),
        root.display()
    );

    Ok(files)
}

/// Any component below the root starting with `.`
fn is_hidden(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.')))
}

/// Build the `<root>/**/*.md` pattern, matching the root literally
fn content_pattern(root: &Path) -> String {
    let root = root.to_string_lossy();
    let trimmed = root.trim_end_matches('/');
    let base = if trimmed.is_empty() { root.as_ref() } else { trimmed };
    let escaped = Pattern::escape(base);
    if escaped.ends_with('/') {
        format!("{}**/*.md", escaped)
    } else {
        format!("{}/**/*.md", escaped)
    }
}

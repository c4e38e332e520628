//! Path display helpers for report output.

use std::path::Path;

/// Format a root-relative path for display.
///
/// Separators are always forward slashes. An empty path displays as `"."`.
#[must_use]
pub fn display_path(relative: &Path) -> String {
    if relative.as_os_str().is_empty() {
        return ".".to_string();
    }
    normalize_separators(&relative.to_string_lossy())
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;

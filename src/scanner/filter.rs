use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScanConfig;
use crate::error::{CommentCheckError, Result};
use crate::language::file_extension;

/// Decides which discovered files make it into the report.
///
/// Paths are relative to the scan root, the same name the report shows, so
/// `test_*.py` excludes `submitted/test_a.py` and `alice/**` a whole
/// subdirectory.
pub trait FileFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

/// Compile exclude patterns into one matcher.
///
/// # Errors
/// Returns `InvalidPattern` naming the first pattern that does not parse.
pub fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| CommentCheckError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| CommentCheckError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })
}

/// The `[scan]` extension allow-list and exclude globs.
pub struct ScanFilter {
    /// Empty accepts every file, so unsupported ones still get reported.
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl ScanFilter {
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, excludes: &[String]) -> Result<Self> {
        Ok(Self {
            extensions,
            excludes: compile_excludes(excludes)?,
        })
    }

    /// # Errors
    /// Returns an error if any configured exclude pattern is invalid.
    pub fn from_config(scan: &ScanConfig) -> Result<Self> {
        Self::new(scan.extensions.clone(), &scan.exclude)
    }

    fn extension_allowed(&self, relative: &Path) -> bool {
        self.extensions.is_empty()
            || file_extension(relative).is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl FileFilter for ScanFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.extension_allowed(relative) && !self.excludes.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

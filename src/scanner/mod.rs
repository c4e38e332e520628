mod filter;

pub use filter::{FileFilter, ScanFilter, compile_excludes};

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CommentCheckError, Result};

/// A discovered file and its path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Equal to the file name when the scan root is the file itself.
    pub relative: PathBuf,
}

/// Files found under one root, plus entries that could not be visited.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<ScannedFile>,
    pub errors: Vec<CommentCheckError>,
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory (or a single file) and return matching files sorted
    /// by name.
    ///
    /// Broken symlinks and unreadable directories do not stop the scan; they
    /// end up in [`ScanResult::errors`].
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    /// Scanner that only lists the files directly inside each root.
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            recursive: false,
        }
    }

    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn scan_impl(&self, root: &Path) -> ScanResult {
        let mut walker = WalkDir::new(root).sort_by_file_name().follow_links(true);
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut result = ScanResult::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    result.errors.push(CommentCheckError::FileRead {
                        path: err.path().unwrap_or(root).to_path_buf(),
                        source: io::Error::from(err),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_to_root(entry.path(), root);
            if self.filter.should_include(&relative) {
                result.files.push(ScannedFile {
                    path: entry.into_path(),
                    relative,
                });
            }
        }
        result
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !root.exists() {
            return Err(CommentCheckError::FileRead {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "path does not exist"),
            });
        }
        Ok(self.scan_impl(root))
    }
}

fn relative_to_root(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path
            .file_name()
            .map_or_else(|| path.to_path_buf(), PathBuf::from),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

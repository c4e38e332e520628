use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_TODO_MARKER;

/// Directory analyzed when no paths are given on the command line.
pub const DEFAULT_SCAN_DIRECTORY: &str = "submitted";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub counting: CountingConfig,

    /// User-defined languages keyed by name. They take precedence over the
    /// built-in languages for the extensions they claim.
    #[serde(default)]
    pub languages: BTreeMap<String, CustomLanguageConfig>,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Default scan root, created on demand when missing.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Descend into subdirectories (default: false, one level only).
    #[serde(default)]
    pub recursive: bool,

    /// Glob patterns for files to skip entirely.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Only consider these extensions. Empty means every file, so unsupported
    /// files are still reported.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            recursive: false,
            exclude: Vec::new(),
            extensions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountingConfig {
    /// Token counted inside comments.
    #[serde(default = "default_todo_marker")]
    pub todo_marker: String,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            todo_marker: default_todo_marker(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// One marker, blocks inferred from matching indentation (`#`).
    #[default]
    Visual,
    /// Line marker plus block open/close markers (`//`, `/* */`).
    Delimited,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub style: CommentStyle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_marker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_end: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_blank_line: Option<bool>,
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_SCAN_DIRECTORY)
}

fn default_todo_marker() -> String {
    DEFAULT_TODO_MARKER.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

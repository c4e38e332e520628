use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommentCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommentCheckError {
    /// Short category name used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Message including the underlying source error, if any.
    #[must_use]
    pub fn detailed_message(&self) -> String {
        match self {
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::InvalidPattern { pattern, source } => format!("{pattern}: {source}"),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

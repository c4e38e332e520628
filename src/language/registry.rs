use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::config::{CommentStyle, CustomLanguageConfig};
use crate::error::{CommentCheckError, Result};

/// Syntax with a single marker token and no block terminator.
///
/// Blocks are inferred from consecutive comment lines sharing the same
/// whitespace prefix before the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualSyntax {
    pub marker: String,
    /// Count an implicit blank line after a final line terminator.
    pub trailing_blank_line: bool,
}

impl VisualSyntax {
    #[must_use]
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            trailing_blank_line: true,
        }
    }

    #[must_use]
    pub const fn with_trailing_blank_line(mut self, enabled: bool) -> Self {
        self.trailing_blank_line = enabled;
        self
    }
}

impl Default for VisualSyntax {
    fn default() -> Self {
        Self::new("#")
    }
}

/// Syntax with a single-line marker plus explicit block open/close markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedSyntax {
    pub line: String,
    pub block_start: String,
    pub block_end: String,
    pub trailing_blank_line: bool,
}

impl DelimitedSyntax {
    #[must_use]
    pub fn new(line: &str, block_start: &str, block_end: &str) -> Self {
        Self {
            line: line.to_string(),
            block_start: block_start.to_string(),
            block_end: block_end.to_string(),
            trailing_blank_line: false,
        }
    }

    #[must_use]
    pub const fn with_trailing_blank_line(mut self, enabled: bool) -> Self {
        self.trailing_blank_line = enabled;
        self
    }
}

impl Default for DelimitedSyntax {
    fn default() -> Self {
        Self::new("//", "/*", "*/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSyntax {
    Visual(VisualSyntax),
    Delimited(DelimitedSyntax),
}

impl CommentSyntax {
    /// Name of the classification engine this syntax selects.
    #[must_use]
    pub const fn engine_name(&self) -> &'static str {
        match self {
            Self::Visual(_) => "visual-block",
            Self::Delimited(_) => "delimited",
        }
    }

    /// Build a syntax from a user-defined language entry.
    ///
    /// # Errors
    /// Returns an error if a marker is empty or the markers do not fit the style.
    pub fn from_config(name: &str, config: &CustomLanguageConfig) -> Result<Self> {
        let reject_empty = |field: &str, value: &str| {
            if value.is_empty() {
                Err(CommentCheckError::Config(format!(
                    "languages.{name}.{field} must not be empty"
                )))
            } else {
                Ok(())
            }
        };

        match config.style {
            CommentStyle::Visual => {
                let stray_marker = [
                    ("block_start", &config.block_start),
                    ("block_end", &config.block_end),
                ]
                .into_iter()
                .find_map(|(field, value)| value.as_ref().map(|_| field));
                if let Some(field) = stray_marker {
                    return Err(CommentCheckError::Config(format!(
                        "languages.{name}.{field} is only valid for style = \"delimited\""
                    )));
                }
                let mut syntax = VisualSyntax::default();
                if let Some(marker) = &config.line_marker {
                    reject_empty("line_marker", marker)?;
                    syntax.marker.clone_from(marker);
                }
                if let Some(enabled) = config.trailing_blank_line {
                    syntax.trailing_blank_line = enabled;
                }
                Ok(Self::Visual(syntax))
            }
            CommentStyle::Delimited => {
                let mut syntax = DelimitedSyntax::default();
                if let Some(marker) = &config.line_marker {
                    reject_empty("line_marker", marker)?;
                    syntax.line.clone_from(marker);
                }
                if let Some(marker) = &config.block_start {
                    reject_empty("block_start", marker)?;
                    syntax.block_start.clone_from(marker);
                }
                if let Some(marker) = &config.block_end {
                    reject_empty("block_end", marker)?;
                    syntax.block_end.clone_from(marker);
                }
                if let Some(enabled) = config.trailing_blank_line {
                    syntax.trailing_blank_line = enabled;
                }
                Ok(Self::Delimited(syntax))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }
}

/// Text after the last `.` of the file name.
///
/// Unlike [`Path::extension`], a dot-file such as `.py` has the extension
/// `py`, so it dispatches the same way as `main.py`.
#[must_use]
pub fn file_extension(path: &Path) -> Option<&str> {
    path.file_name()?
        .to_str()?
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a language. Extensions already claimed are taken over.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_path(&self, path: &Path) -> Option<&Language> {
        file_extension(path).and_then(|ext| self.get_by_extension(ext))
    }

    /// Built-in languages followed by the user-defined ones.
    ///
    /// # Errors
    /// Returns an error if a user-defined language has invalid markers.
    pub fn with_custom_languages(custom: &BTreeMap<String, CustomLanguageConfig>) -> Result<Self> {
        let mut registry = Self::default();

        for (name, config) in custom {
            let language = Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comment_syntax: CommentSyntax::from_config(name, config)?,
            };
            registry.register(language);
        }

        Ok(registry)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(Language::new(
            "Python",
            vec!["py"],
            CommentSyntax::Visual(VisualSyntax::new("#")),
        ));

        registry.register(Language::new(
            "C-family",
            vec!["h", "c", "cpp", "m", "js", "java", "swift"],
            CommentSyntax::Delimited(DelimitedSyntax::new("//", "/*", "*/")),
        ));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

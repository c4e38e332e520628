use crate::error::{CommentCheckError, Result};
use crate::language::CommentSyntax;
use crate::scanner::compile_excludes;

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the TODO marker is empty, an exclude glob is invalid,
/// or a user-defined language is misconfigured.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.counting.todo_marker.is_empty() {
        return Err(CommentCheckError::Config(
            "counting.todo_marker must not be empty".to_string(),
        ));
    }

    compile_excludes(&config.scan.exclude)?;

    for (name, language) in &config.languages {
        if language.extensions.is_empty() {
            return Err(CommentCheckError::Config(format!(
                "languages.{name}.extensions must list at least one extension"
            )));
        }
        if let Some(ext) = language.extensions.iter().find(|e| e.starts_with('.')) {
            return Err(CommentCheckError::Config(format!(
                "languages.{name}.extensions: write \"{}\" without the leading dot",
                ext.trim_start_matches('.')
            )));
        }
        CommentSyntax::from_config(name, language)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

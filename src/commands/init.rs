use std::fs;

use crate::cli::InitArgs;
use crate::{CommentCheckError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CommentCheckError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r##"# comment-check configuration file

[scan]
# Directory analyzed when no paths are given (created if missing)
directory = "submitted"

# Descend into subdirectories (default: false)
recursive = false

# Files to skip, as globs relative to the scanned directory
# ("test_*.py", "alice/**")
exclude = []

# Only consider these extensions. Empty means every file, and files in
# languages without a comment scheme are listed as unsupported.
extensions = []

[counting]
# Token counted inside comments
todo_marker = "TODO"

# Additional languages. Built in: Python (py) and C-family
# (h, c, cpp, m, js, java, swift). A language listed here takes over
# the extensions it claims.
#
# "visual" style: one marker; consecutive marker lines at the same
# indentation form a block.
# [languages.shell]
# extensions = ["sh", "bash"]
# style = "visual"
# line_marker = "#"
#
# "delimited" style: line marker plus explicit block markers.
# [languages.sql]
# extensions = ["sql"]
# style = "delimited"
# line_marker = "--"
# block_start = "/*"
# block_end = "*/"
# trailing_blank_line = false
"##
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

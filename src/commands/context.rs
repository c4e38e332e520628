use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::CommentCheckError;
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};

/// Stderr diagnostics gated by the global `-v` and `-q` flags.
///
/// Errors are always printed. Warnings are dropped by `-q`. Info needs `-v`
/// and debug needs `-vv`, both silenced by `-q`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reporter {
    verbose: u8,
    quiet: bool,
}

impl Reporter {
    #[must_use]
    pub const fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.verbose, cli.quiet)
    }

    #[must_use]
    pub const fn shows_info(&self) -> bool {
        !self.quiet && self.verbose >= 1
    }

    #[must_use]
    pub const fn shows_debug(&self) -> bool {
        !self.quiet && self.verbose >= 2
    }

    #[must_use]
    pub const fn shows_warnings(&self) -> bool {
        !self.quiet
    }

    pub fn info(&self, message: impl Display) {
        if self.shows_info() {
            eprintln!("{message}");
        }
    }

    pub fn debug(&self, message: impl Display) {
        if self.shows_debug() {
            eprintln!("  {message}");
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.shows_warnings() {
            eprintln!("Warning: {message}");
        }
    }

    pub fn error(&self, error: &CommentCheckError) {
        eprintln!("Error [{}]: {}", error.error_type(), error.detailed_message());
    }
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

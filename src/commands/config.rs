use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config};
use crate::output::OutputFormat;
use crate::{CommentCheckError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{Reporter, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let reporter = Reporter::from_cli(cli);
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, &reporter),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config, &reporter)
        }
    }
}

fn run_config_validate(config_path: &Path, reporter: &Reporter) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(config) => {
            println!("Configuration is valid: {}", config_path.display());
            reporter.info(format!(
                "{} custom language(s) defined",
                config.languages.len()
            ));
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(CommentCheckError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    parse_config(&content)
}

fn run_config_show(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
    reporter: &Reporter,
) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => format_config_text(&loaded.config, loaded.source.as_deref()),
    }
}

pub(crate) fn format_config_text(config: &Config, source: Option<&Path>) -> Result<String> {
    let mut output = String::from("=== Effective Configuration ===\n");
    match source {
        Some(path) => output.push_str(&format!("# source: {}\n\n", path.display())),
        None => output.push_str("# source: built-in defaults\n\n"),
    }
    output.push_str(&toml::to_string_pretty(config)?);
    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::counter::CommentCounter;
use crate::language::LanguageRegistry;
use crate::output::{
    ColorMode, FileOutcome, FileReport, JsonFormatter, OutputFormat, Report, ReportFormatter,
    TextFormatter, display_path,
};
use crate::scanner::{DirectoryScanner, FileScanner, ScanFilter};
use crate::{CommentCheckError, EXIT_CONFIG_ERROR, EXIT_READ_FAILURE, EXIT_SUCCESS, Result};

use super::context::{Reporter, load_config, write_output};

/// A file found by the scanner, with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiscoveredFile {
    pub path: PathBuf,
    pub display_name: String,
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    let reporter = Reporter::from_cli(cli);
    match run_check_impl(args, cli, &reporter) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            reporter.error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli, reporter: &Reporter) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    match &loaded.source {
        Some(path) => reporter.info(format!("Using configuration: {}", path.display())),
        None => reporter.info("No configuration file found, using defaults"),
    }
    let mut config = loaded.config;

    // 2. Apply CLI argument overrides, then re-check what they may have broken
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Build language registry and scanner
    let registry = LanguageRegistry::with_custom_languages(&config.languages)?;
    let filter = ScanFilter::from_config(&config.scan)?;
    let scanner = DirectoryScanner::new(filter).recursive(config.scan.recursive);

    // 4. Discover files
    let roots = resolve_scan_roots(&args.paths, &config, reporter)?;
    let mut read_failures = 0usize;
    let mut discovered = Vec::new();
    for root in &roots {
        match discover_files(&scanner, root) {
            Ok((files, errors)) => {
                for e in &errors {
                    reporter.error(e);
                }
                read_failures += errors.len();
                discovered.extend(files);
            }
            Err(e) => {
                reporter.error(&e);
                read_failures += 1;
            }
        }
    }
    reporter.info(format!("Found {} file(s)", discovered.len()));

    // 5. Count comments in parallel, keeping scan order
    let todo_marker = config.counting.todo_marker.as_str();
    let outcomes: Vec<(DiscoveredFile, Result<FileOutcome>)> = discovered
        .into_par_iter()
        .map(|file| {
            let outcome = analyze_file(&file.path, &registry, todo_marker);
            (file, outcome)
        })
        .collect();

    let mut files = Vec::with_capacity(outcomes.len());
    for (file, outcome) in outcomes {
        match outcome {
            Ok(outcome) => {
                if let Some(language) = registry.get_by_path(&file.path) {
                    reporter.debug(format!(
                        "{}: {} ({})",
                        file.display_name,
                        language.name,
                        language.comment_syntax.engine_name()
                    ));
                }
                files.push(FileReport {
                    display_name: file.display_name,
                    outcome,
                });
            }
            Err(e) => {
                reporter.error(&e);
                read_failures += 1;
            }
        }
    }

    // 6. Format and write the report
    let report = Report::new(files);
    let output = format_report(&report, args.format, ColorMode::from(cli.color))?;
    write_output(args.output.as_deref(), &output)?;

    if read_failures > 0 {
        reporter.warn(format!("{read_failures} path(s) could not be read"));
        Ok(EXIT_READ_FAILURE)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scan.extensions.clone_from(ext);
    }
    config.scan.exclude.extend(args.exclude.iter().cloned());
    if args.recursive {
        config.scan.recursive = true;
    }
    if let Some(marker) = &args.todo_marker {
        config.counting.todo_marker.clone_from(marker);
    }
}

/// Paths given on the command line, or the configured scan directory.
///
/// The scan directory is created when missing, so a first run reports no
/// files instead of failing.
pub(crate) fn resolve_scan_roots(
    paths: &[PathBuf],
    config: &Config,
    reporter: &Reporter,
) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths.to_vec());
    }

    let directory = &config.scan.directory;
    if !directory.exists() {
        fs::create_dir_all(directory)?;
        reporter.info(format!("Created scan directory: {}", directory.display()));
    }
    Ok(vec![directory.clone()])
}

/// Files under `root` named for the report, plus entries the walk could
/// not visit.
pub(crate) fn discover_files<S: FileScanner>(
    scanner: &S,
    root: &Path,
) -> Result<(Vec<DiscoveredFile>, Vec<CommentCheckError>)> {
    let scanned = scanner.scan(root)?;
    let files = scanned
        .files
        .into_iter()
        .map(|file| DiscoveredFile {
            display_name: display_path(&file.relative),
            path: file.path,
        })
        .collect();
    Ok((files, scanned.errors))
}

/// Classify one file with the language its extension selects.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened or is not valid UTF-8.
pub(crate) fn analyze_file(
    path: &Path,
    registry: &LanguageRegistry,
    todo_marker: &str,
) -> Result<FileOutcome> {
    let Some(language) = registry.get_by_path(path) else {
        return Ok(FileOutcome::Unsupported);
    };

    let read_error = |source| CommentCheckError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let tally = CommentCounter::new(&language.comment_syntax)
        .with_todo_marker(todo_marker)
        .count_reader(BufReader::new(file))
        .map_err(read_error)?;

    Ok(FileOutcome::Analyzed {
        language: language.name.clone(),
        tally,
    })
}

pub(crate) fn format_report(
    report: &Report,
    format: OutputFormat,
    color: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(report),
        OutputFormat::Json => Ok(format!("{}\n", JsonFormatter.format(report)?)),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

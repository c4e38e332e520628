use serde::Serialize;

use crate::counter::Tally;
use crate::error::Result;

use super::{FileOutcome, Report, ReportFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<FileEntry<'a>>,
    unsupported: Vec<&'a str>,
    totals: Tally,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    path: &'a str,
    language: &'a str,
    stats: &'a Tally,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let files = report
            .files
            .iter()
            .filter_map(|file| match &file.outcome {
                FileOutcome::Analyzed { language, tally } => Some(FileEntry {
                    path: &file.display_name,
                    language,
                    stats: tally,
                }),
                FileOutcome::Unsupported => None,
            })
            .collect();

        let output = JsonOutput {
            files,
            unsupported: report
                .unsupported()
                .map(|file| file.display_name.as_str())
                .collect(),
            totals: report.totals(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

use crate::counter::Tally;

/// What happened to one discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Analyzed { language: String, tally: Tally },
    /// No registered language claims the file's extension.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Name shown in reports, relative to the scanned root.
    pub display_name: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    #[must_use]
    pub const fn tally(&self) -> Option<&Tally> {
        match &self.outcome {
            FileOutcome::Analyzed { tally, .. } => Some(tally),
            FileOutcome::Unsupported => None,
        }
    }
}

/// Results of one run, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl Report {
    #[must_use]
    pub const fn new(files: Vec<FileReport>) -> Self {
        Self { files }
    }

    pub fn analyzed(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.tally().is_some())
    }

    pub fn unsupported(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Unsupported))
    }

    #[must_use]
    pub fn analyzed_count(&self) -> usize {
        self.analyzed().count()
    }

    /// Sum of every analyzed file's tally.
    #[must_use]
    pub fn totals(&self) -> Tally {
        self.files.iter().filter_map(FileReport::tally).copied().sum()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

use std::fmt::Write;

use crate::counter::Tally;
use crate::error::Result;

use super::{FileOutcome, Report, ReportFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text report, one statistics block per analyzed file.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_tally(output: &mut String, tally: &Tally) {
        let rows = [
            ("lines", tally.lines),
            ("comment lines", tally.comments),
            ("single line comments", tally.single_line_comments),
            ("comment lines within block comments", tally.comments_in_blocks),
            ("block line comments", tally.blocks),
            ("TODO\u{2019}s", tally.todos),
        ];
        for (label, value) in rows {
            writeln!(output, "Total # of {label}: {value}").ok();
        }
        output.push('\n');
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for file in &report.files {
            match &file.outcome {
                FileOutcome::Analyzed { tally, .. } => {
                    let header = format!("Statistics for file {}", file.display_name);
                    writeln!(output, "{}", self.colorize(&header, ansi::CYAN)).ok();
                    Self::write_tally(&mut output, tally);
                }
                FileOutcome::Unsupported => {
                    let notice = format!(
                        "Sorry, this program doesn't support the comment scheme for {} yet.",
                        file.display_name
                    );
                    writeln!(output, "{}\n", self.colorize(&notice, ansi::YELLOW)).ok();
                }
            }
        }

        let analyzed = report.analyzed_count();
        if analyzed > 1 {
            let header = format!("Totals for {analyzed} files");
            writeln!(output, "{}", self.colorize(&header, ansi::BOLD)).ok();
            Self::write_tally(&mut output, &report.totals());
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

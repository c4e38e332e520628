use crate::language::DelimitedSyntax;

use super::literal::strip_literals;
use super::tally::{LineKind, Tally};
use super::LineClassifier;

/// Classifier for syntaxes with a line marker and non-nesting block markers.
pub struct DelimitedClassifier<'a> {
    syntax: &'a DelimitedSyntax,
    todo_marker: &'a str,
    in_block: bool,
    tally: Tally,
    ended_with_newline: bool,
}

impl<'a> DelimitedClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a DelimitedSyntax, todo_marker: &'a str) -> Self {
        Self {
            syntax,
            todo_marker,
            in_block: false,
            tally: Tally::new(),
            ended_with_newline: false,
        }
    }

    #[must_use]
    pub const fn in_block(&self) -> bool {
        self.in_block
    }

    fn count_todo(&mut self, text: &str) {
        if text.contains(self.todo_marker) {
            self.tally.todos += 1;
        }
    }

    fn classify_stripped(&mut self, text: &str) -> LineKind {
        let syntax = self.syntax;

        // Line marker wins even when block markers follow it on the same line.
        if let Some(idx) = text.find(syntax.line.as_str()) {
            self.count_todo(&text[idx..]);
            return LineKind::SingleLineComment;
        }

        if let Some(idx) = text.find(syntax.block_start.as_str()) {
            if text.contains(syntax.block_end.as_str()) {
                self.tally.blocks += 1;
                self.in_block = false;
            } else {
                self.in_block = true;
            }
            self.count_todo(&text[idx..]);
            return LineKind::BlockCommentLine;
        }

        if text.contains(syntax.block_end.as_str()) {
            if !self.in_block {
                // Stray close marker with no open block.
                return LineKind::Code;
            }
            self.in_block = false;
            self.tally.blocks += 1;
            return LineKind::BlockCommentLine;
        }

        if self.in_block {
            self.count_todo(text);
            return LineKind::BlockCommentLine;
        }

        LineKind::Code
    }
}

impl LineClassifier for DelimitedClassifier<'_> {
    fn classify_line(&mut self, line: &str) {
        self.tally.lines += 1;
        self.ended_with_newline = line.ends_with('\n');

        let stripped = strip_literals(line);
        let kind = self.classify_stripped(&stripped);
        self.tally.record(kind);
    }

    fn finish(mut self) -> Tally {
        if self.syntax.trailing_blank_line && self.ended_with_newline {
            self.tally.lines += 1;
        }
        self.tally
    }
}

#[cfg(test)]
#[path = "delimited_tests.rs"]
mod tests;

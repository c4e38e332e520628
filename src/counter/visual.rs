use crate::language::VisualSyntax;

use super::literal::strip_literals;
use super::tally::{LineKind, Tally};
use super::LineClassifier;

/// State carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisualState {
    /// Previous line was code, or a comment that cannot open a block.
    #[default]
    Idle,
    /// Previous line was a comment with a whitespace-only prefix. It becomes
    /// the first line of a block if the next comment has the same prefix,
    /// otherwise it is a single-line comment.
    Pending { prefix: String },
    /// Inside a block whose lines all share `prefix`.
    InBlock { prefix: String },
}

/// Classifier for syntaxes with one marker token and no block terminator.
///
/// A block is two or more consecutive comment lines whose text before the
/// marker is identical and made only of whitespace.
pub struct VisualBlockClassifier<'a> {
    syntax: &'a VisualSyntax,
    todo_marker: &'a str,
    state: VisualState,
    tally: Tally,
    ended_with_newline: bool,
}

impl<'a> VisualBlockClassifier<'a> {
    #[must_use]
    pub fn new(syntax: &'a VisualSyntax, todo_marker: &'a str) -> Self {
        Self {
            syntax,
            todo_marker,
            state: VisualState::Idle,
            tally: Tally::new(),
            ended_with_newline: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &VisualState {
        &self.state
    }

    fn resolve_pending(&mut self) {
        if matches!(self.state, VisualState::Pending { .. }) {
            self.tally.record(LineKind::SingleLineComment);
        }
        self.state = VisualState::Idle;
    }

    fn start_candidate(&mut self, prefix: &str) {
        if prefix.chars().all(char::is_whitespace) {
            self.state = VisualState::Pending {
                prefix: prefix.to_string(),
            };
        } else {
            self.tally.record(LineKind::SingleLineComment);
            self.state = VisualState::Idle;
        }
    }
}

impl LineClassifier for VisualBlockClassifier<'_> {
    fn classify_line(&mut self, line: &str) {
        self.tally.lines += 1;
        self.ended_with_newline = line.ends_with('\n');

        let stripped = strip_literals(line);
        let Some(idx) = stripped.find(self.syntax.marker.as_str()) else {
            self.resolve_pending();
            return;
        };

        let (prefix, suffix) = stripped.split_at(idx);
        if suffix.contains(self.todo_marker) {
            self.tally.todos += 1;
        }

        match std::mem::take(&mut self.state) {
            VisualState::InBlock { prefix: block_prefix } if block_prefix == prefix => {
                self.tally.record(LineKind::BlockCommentLine);
                self.state = VisualState::InBlock {
                    prefix: block_prefix,
                };
            }
            VisualState::Pending { prefix: block_prefix } if block_prefix == prefix => {
                self.tally.record(LineKind::BlockCommentLine);
                self.tally.record(LineKind::BlockCommentLine);
                self.tally.blocks += 1;
                self.state = VisualState::InBlock {
                    prefix: block_prefix,
                };
            }
            VisualState::Pending { .. } => {
                self.tally.record(LineKind::SingleLineComment);
                self.start_candidate(prefix);
            }
            VisualState::InBlock { .. } | VisualState::Idle => self.start_candidate(prefix),
        }
    }

    fn finish(mut self) -> Tally {
        self.resolve_pending();
        if self.syntax.trailing_blank_line && self.ended_with_newline {
            self.tally.lines += 1;
        }
        self.tally
    }
}

#[cfg(test)]
#[path = "visual_tests.rs"]
mod tests;

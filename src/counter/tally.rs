use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    SingleLineComment,
    BlockCommentLine,
}

/// Per-file comment statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub lines: usize,
    pub comments: usize,
    pub single_line_comments: usize,
    pub comments_in_blocks: usize,
    pub blocks: usize,
    pub todos: usize,
}

impl Tally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            comments: 0,
            single_line_comments: 0,
            comments_in_blocks: 0,
            blocks: 0,
            todos: 0,
        }
    }

    /// Count one classified line. Code lines only count toward `lines`, which
    /// the classifiers track separately as lines are consumed.
    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => {}
            LineKind::SingleLineComment => {
                self.comments += 1;
                self.single_line_comments += 1;
            }
            LineKind::BlockCommentLine => {
                self.comments += 1;
                self.comments_in_blocks += 1;
            }
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.comments += rhs.comments;
        self.single_line_comments += rhs.single_line_comments;
        self.comments_in_blocks += rhs.comments_in_blocks;
        self.blocks += rhs.blocks;
        self.todos += rhs.todos;
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, tally| {
            acc += tally;
            acc
        })
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;

mod delimited;
mod literal;
mod tally;
mod visual;

pub use delimited::DelimitedClassifier;
pub use literal::strip_literals;
pub use tally::{LineKind, Tally};
pub use visual::{VisualBlockClassifier, VisualState};

use std::io::BufRead;

use crate::language::CommentSyntax;

pub const DEFAULT_TODO_MARKER: &str = "TODO";

/// Line-by-line comment classifier for one file.
///
/// Lines are fed in file order, each with its original line terminator.
pub trait LineClassifier {
    fn classify_line(&mut self, line: &str);

    /// Resolve any state still held and return the file's tally.
    fn finish(self) -> Tally;
}

/// Runs the classifier matching a [`CommentSyntax`] over a whole file.
pub struct CommentCounter<'a> {
    syntax: &'a CommentSyntax,
    todo_marker: &'a str,
}

impl<'a> CommentCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            syntax,
            todo_marker: DEFAULT_TODO_MARKER,
        }
    }

    #[must_use]
    pub const fn with_todo_marker(mut self, todo_marker: &'a str) -> Self {
        self.todo_marker = todo_marker;
        self
    }

    #[must_use]
    pub fn count(&self, source: &str) -> Tally {
        match self.syntax {
            CommentSyntax::Visual(syntax) => {
                run(VisualBlockClassifier::new(syntax, self.todo_marker), source)
            }
            CommentSyntax::Delimited(syntax) => {
                run(DelimitedClassifier::new(syntax, self.todo_marker), source)
            }
        }
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading fails, including input that is not valid UTF-8.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<Tally> {
        match self.syntax {
            CommentSyntax::Visual(syntax) => run_reader(
                VisualBlockClassifier::new(syntax, self.todo_marker),
                reader,
            ),
            CommentSyntax::Delimited(syntax) => run_reader(
                DelimitedClassifier::new(syntax, self.todo_marker),
                reader,
            ),
        }
    }
}

fn run<C: LineClassifier>(mut classifier: C, source: &str) -> Tally {
    for line in source.split_inclusive('\n') {
        classifier.classify_line(line);
    }
    classifier.finish()
}

fn run_reader<C: LineClassifier, R: BufRead>(
    mut classifier: C,
    mut reader: R,
) -> std::io::Result<Tally> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        classifier.classify_line(&line);
    }
    Ok(classifier.finish())
}

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageRegistry;

    #[test]
    fn counter_integration_with_language() {
        let registry = LanguageRegistry::default();
        let python = registry.get_by_extension("py").unwrap();
        let counter = CommentCounter::new(&python.comment_syntax);

        let source = "# header\n# more\nx = 1  # trailing\n";
        let tally = counter.count(source);

        assert_eq!(tally.lines, 4);
        assert_eq!(tally.comments, 3);
        assert_eq!(tally.blocks, 1);
        assert_eq!(tally.single_line_comments, 1);
    }

    #[test]
    fn count_and_count_reader_agree() {
        let registry = LanguageRegistry::default();
        let c = registry.get_by_extension("c").unwrap();
        let counter = CommentCounter::new(&c.comment_syntax);

        let source = "/* a\n * TODO b\n */\nint x; // y\n";
        let from_str = counter.count(source);
        let from_reader = counter
            .count_reader(std::io::Cursor::new(source.as_bytes()))
            .unwrap();

        assert_eq!(from_str, from_reader);
        assert_eq!(from_str.todos, 1);
        assert_eq!(from_str.blocks, 1);
    }
}

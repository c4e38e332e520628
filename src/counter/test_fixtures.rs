//! Shared test fixtures for counter tests.
//!
//! Provides the syntaxes and a line-feeding helper used across the
//! `visual_tests` and `delimited_tests` modules.

use crate::language::{DelimitedSyntax, VisualSyntax};

use super::{LineClassifier, Tally};

/// Python-style `#` comments.
pub fn hash_syntax() -> VisualSyntax {
    VisualSyntax::new("#")
}

/// C-style `//` and `/* */` comments.
pub fn c_syntax() -> DelimitedSyntax {
    DelimitedSyntax::new("//", "/*", "*/")
}

/// Feed `lines` to a classifier exactly as given and return the final tally.
pub fn classify_all<C: LineClassifier>(mut classifier: C, lines: &[&str]) -> Tally {
    for line in lines {
        classifier.classify_line(line);
    }
    classifier.finish()
}

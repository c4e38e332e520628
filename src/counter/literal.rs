use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest quoted span per quote kind. A backslash consumes the following
/// character, so an escaped quote never closes the span. Spans stop at a newline.
static LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#).expect("Invalid regex")
});

/// Remove every `"..."` and `'...'` literal span from a line.
///
/// Spans are deleted outright rather than replaced by a placeholder. An opening
/// quote without a closing partner is left in place, along with everything
/// after it that does not form a complete span of its own.
#[must_use]
pub fn strip_literals(line: &str) -> Cow<'_, str> {
    LITERAL_PATTERN.replace_all(line, "")
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;

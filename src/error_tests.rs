use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = CommentCheckError::Config("todo_marker must not be empty".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: todo_marker must not be empty"
    );
}

#[test]
fn error_display_file_read() {
    let err = CommentCheckError::FileRead {
        path: PathBuf::from("submitted/main.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("submitted/main.py"));
}

#[test]
fn file_read_detailed_message_includes_source() {
    let err = CommentCheckError::FileRead {
        path: PathBuf::from("bad.c"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };
    let message = err.detailed_message();
    assert!(message.contains("bad.c"));
    assert!(message.contains("valid UTF-8"));
}

#[test]
fn invalid_pattern_reports_pattern() {
    let source = globset::Glob::new("[unclosed").unwrap_err();
    let err = CommentCheckError::InvalidPattern {
        pattern: "[unclosed".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid glob pattern: [unclosed");
    assert!(err.detailed_message().starts_with("[unclosed: "));
    assert_eq!(err.error_type(), "InvalidPattern");
}

#[test]
fn io_error_converts_with_question_mark() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk on fire"))?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, CommentCheckError::Io(_)));
    assert_eq!(err.error_type(), "IO");
    assert_eq!(err.to_string(), "IO error: disk on fire");
}

#[test]
fn toml_error_converts() {
    let parse: std::result::Result<toml::Value, _> = toml::from_str("[scan");
    let err: CommentCheckError = parse.unwrap_err().into();
    assert_eq!(err.error_type(), "TOML");
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        CommentCheckError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        CommentCheckError::FileRead {
            path: PathBuf::from("x"),
            source: std::io::Error::other("x"),
        }
        .error_type(),
        "FileRead"
    );
}

use std::path::{Path, PathBuf};

use super::*;

mod mock_fs;

use mock_fs::MockFileSystem;

const LOCAL_PATH: &str = "/project/.comment-check.toml";
const USER_PATH: &str = "/home/user/.config/comment-check/config.toml";

#[test]
fn returns_default_when_no_config_exists() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert_eq!(result.source, None);
}

#[test]
fn loads_local_config() {
    let fs = MockFileSystem::new().with_file(
        LOCAL_PATH,
        r#"
[scan]
directory = "homework"
"#,
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.scan.directory, PathBuf::from("homework"));
    assert_eq!(result.source, Some(PathBuf::from(LOCAL_PATH)));
}

#[test]
fn falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        USER_PATH,
        r#"
[counting]
todo_marker = "FIXME"
"#,
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.counting.todo_marker, "FIXME");
    assert_eq!(result.source, Some(PathBuf::from(USER_PATH)));
}

#[test]
fn local_config_wins_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL_PATH, "[counting]\ntodo_marker = \"LOCAL\"\n")
        .with_file(USER_PATH, "[counting]\ntodo_marker = \"USER\"\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.counting.todo_marker, "LOCAL");
}

#[test]
fn missing_user_config_dir_is_tolerated() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.source, None);
}

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file(
        "/custom/path/config.toml",
        r#"
[languages.shell]
extensions = ["sh"]
"#,
    );

    let loader = FileConfigLoader::with_fs(fs);
    let result = loader
        .load_from_path(Path::new("/custom/path/config.toml"))
        .unwrap();

    assert!(result.config.languages.contains_key("shell"));
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new().with_file(LOCAL_PATH, "this is not valid toml [[[");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CommentCheckError::TomlParse(_)));
}

#[test]
fn returns_error_for_invalid_semantics() {
    let fs = MockFileSystem::new().with_file(LOCAL_PATH, "[counting]\ntodo_marker = \"\"\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CommentCheckError::Config(_)));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/does/not/exist.toml"))
        .unwrap_err();

    match err {
        CommentCheckError::FileRead { path, .. } => {
            assert_eq!(path, PathBuf::from("/does/not/exist.toml"));
        }
        other => panic!("Expected FileRead, got {other:?}"),
    }
}

#[test]
fn parse_config_validates() {
    assert!(parse_config("[scan]\nexclude = [\"[oops\"]\n").is_err());
    assert!(parse_config("[scan]\nexclude = [\"**/build/**\"]\n").is_ok());
}

use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();

    assert_eq!(config.scan.directory, PathBuf::from("submitted"));
    assert!(!config.scan.recursive);
    assert!(config.scan.exclude.is_empty());
    assert!(config.scan.extensions.is_empty());
    assert_eq!(config.counting.todo_marker, "TODO");
    assert!(config.languages.is_empty());
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_scan_section_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[scan]
recursive = true
"#,
    )
    .unwrap();

    assert!(config.scan.recursive);
    assert_eq!(config.scan.directory, PathBuf::from("submitted"));
    assert_eq!(config.counting.todo_marker, "TODO");
}

#[test]
fn parse_full_config() {
    let config: Config = toml::from_str(
        r#"
[scan]
directory = "homework"
exclude = ["**/vendor/**"]
extensions = ["py", "c"]

[counting]
todo_marker = "FIXME"

[languages.shell]
extensions = ["sh", "bash"]
style = "visual"

[languages.sql]
extensions = ["sql"]
style = "delimited"
line_marker = "--"
trailing_blank_line = true
"#,
    )
    .unwrap();

    assert_eq!(config.scan.directory, PathBuf::from("homework"));
    assert_eq!(config.scan.exclude, vec!["**/vendor/**"]);
    assert_eq!(config.scan.extensions, vec!["py", "c"]);
    assert_eq!(config.counting.todo_marker, "FIXME");

    let shell = &config.languages["shell"];
    assert_eq!(shell.style, CommentStyle::Visual);
    assert_eq!(shell.line_marker, None);

    let sql = &config.languages["sql"];
    assert_eq!(sql.style, CommentStyle::Delimited);
    assert_eq!(sql.line_marker.as_deref(), Some("--"));
    assert_eq!(sql.trailing_blank_line, Some(true));
}

#[test]
fn unknown_style_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r#"
[languages.odd]
extensions = ["odd"]
style = "nested"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn config_roundtrips_through_toml() {
    let mut config = Config::default();
    config.languages.insert(
        "shell".to_string(),
        CustomLanguageConfig {
            extensions: vec!["sh".to_string()],
            ..Default::default()
        },
    );

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

mod loader;
mod model;
mod validation;

pub use loader::{
    parse_config, ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem,
    LOCAL_CONFIG_NAME,
};
pub use model::{
    CommentStyle, Config, CountingConfig, CustomLanguageConfig, ScanConfig,
    DEFAULT_SCAN_DIRECTORY,
};
pub use validation::validate_config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.scan.directory.to_str(), Some(DEFAULT_SCAN_DIRECTORY));
        assert_eq!(config.counting.todo_marker, "TODO");
    }
}

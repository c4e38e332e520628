#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the comment-check binary.
#[macro_export]
macro_rules! comment_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("comment-check"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file under the default `submitted` directory.
    pub fn submit(&self, name: &str, content: &str) {
        self.create_file(&format!("submitted/{name}"), content);
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.comment-check.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".comment-check.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Python source with one two-line block, one indented single comment and a TODO.
pub const PYTHON_SAMPLE: &str = "\
# Module header
# TODO: document this
import os

def main():
    x = 1  # trailing comment
    print(\"# not a comment\")
";

/// C source with a three-line block, a single-line comment and a TODO.
pub const C_SAMPLE: &str = "\
/* Program entry
 * TODO handle argv
 */
int main(void) {
    return 0; // done
}
";

/// Config defining a shell language and a FIXME marker.
pub const CUSTOM_CONFIG: &str = r#"
[counting]
todo_marker = "FIXME"

[languages.shell]
extensions = ["sh"]
style = "visual"
"#;

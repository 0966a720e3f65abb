#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the vue3-scan binary.
///
/// The advisor key and user-level configuration are cleared so runs are hermetic.
#[macro_export]
macro_rules! vue3_scan {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("vue3-scan"));
        cmd.env_remove("GROQ_API_KEY").env_remove("RUST_LOG");
        cmd
    }};
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

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.vue3-scan.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".vue3-scan.toml", content);
    }

    /// Lays out a small Vue 2 project: one `Widget` module with a low and a
    /// high complexity component, plus a clean entry point.
    pub fn create_widget_project(&self) {
        self.create_file("src/components/Widget/A.vue", "export default Vue.extend({})\n");
        self.create_file(
            "src/components/Widget/B.vue",
            "module.exports = { configureWebpack: {} }\nthis.$on('ready', init)\n",
        );
        self.create_file("src/main.js", "console.log('hello')\n");
    }
}

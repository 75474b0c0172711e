//! Common test utilities for ebstage integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test application directory with an ebstage.yaml
#[allow(dead_code)]
pub struct TestApp {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the test root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test app with an empty app directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("app")).expect("Failed to create app directory");
        Self { temp, path }
    }

    /// Write the ebstage.yaml with the given extra configuration lines
    pub fn write_config(&self, extra: &str) {
        let contents = format!(
            "name: myapp\nversion: 1.0.0\npath: ./app\n{extra}build:\n  build_location: ./build\n"
        );
        self.write_file("ebstage.yaml", &contents);
    }

    /// Write a file relative to the test root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the test root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the test root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of a staged bundle file
    pub fn bundle_path(&self, path: &str) -> PathBuf {
        self.path.join("build/bundle").join(path)
    }

    /// List entry paths in the produced archive
    pub fn archive_entries(&self) -> Vec<String> {
        let file = std::fs::File::open(self.path.join("build/bundle.tar.gz"))
            .expect("Failed to open archive");
        let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(file));
        tar.entries()
            .expect("Failed to read archive entries")
            .map(|e| {
                e.expect("Failed to read entry")
                    .path()
                    .expect("Failed to read entry path")
                    .display()
                    .to_string()
            })
            .collect()
    }
}

/// Command for the ebstage binary
pub fn ebstage_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("ebstage").expect("Failed to find ebstage binary")
}

//! Temporary credential files for testing
//!
//! Each guard owns a temporary directory that is removed when the guard is
//! dropped, so tests never touch a real key file.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File name used when a test does not care about the name
pub const TEST_FILE_NAME: &str = "service-account.json";

/// RAII guard for a credential file inside a temporary directory
pub struct CredentialFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl CredentialFileGuard {
  /// Create a guard whose file holds `contents`
  pub fn new(contents: &str) -> Self {
    Self::with_file_name(TEST_FILE_NAME, contents)
  }

  /// Create a guard whose file has a specific name, e.g. the default key
  /// file name the CLI looks for
  pub fn with_file_name(file_name: &str, contents: &str) -> Self {
    let guard = Self::missing_named(file_name);
    guard.write(contents);
    guard
  }

  /// Create a guard whose file holds raw bytes (for encoding tests)
  pub fn with_bytes(bytes: &[u8]) -> Self {
    let guard = Self::missing();
    fs::write(&guard.path, bytes).expect("Failed to write test credential file");
    guard
  }

  /// Create a guard whose path points at a file that does not exist
  pub fn missing() -> Self {
    Self::missing_named(TEST_FILE_NAME)
  }

  fn missing_named(file_name: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(file_name);
    Self { temp_dir, path }
  }

  /// Replace the file contents
  pub fn write(&self, contents: &str) {
    fs::write(&self.path, contents).expect("Failed to write test credential file");
  }

  /// Path to the credential file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Path to the temporary directory holding the file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

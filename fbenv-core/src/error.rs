//! # Credential Errors
//!
//! Failure kinds for loading a service-account key file. Malformed JSON and a
//! missing required field share one kind, so callers report both the same way.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a service-account key file
#[derive(Debug, Error)]
pub enum CredentialError {
  /// The path does not point at a regular file
  #[error("the file '{}' was not found", path.display())]
  NotFound { path: PathBuf },

  /// The file exists but could not be read as UTF-8 text
  #[error("failed to read '{}': {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The contents are not valid JSON or lack one of the required fields
  #[error("{source}")]
  Malformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl CredentialError {
  /// The credential file path the error refers to
  pub fn path(&self) -> &Path {
    match self {
      Self::NotFound { path } | Self::Read { path, .. } | Self::Malformed { path, .. } => path,
    }
  }

  /// Whether the file was missing, as opposed to present but unusable
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound { .. })
  }

  /// A remediation hint to show below the error message
  pub fn hint(&self) -> &'static str {
    match self {
      Self::NotFound { .. } => {
        "Make sure the file name is correct and that it is in the directory you run fbenv from."
      }
      Self::Read { .. } | Self::Malformed { .. } => "Make sure the JSON file is not corrupted.",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn malformed(contents: &str) -> CredentialError {
    let source = serde_json::from_str::<serde_json::Value>(contents).unwrap_err();
    CredentialError::Malformed {
      path: PathBuf::from("key.json"),
      source,
    }
  }

  #[test]
  fn not_found_names_the_path() {
    let err = CredentialError::NotFound {
      path: PathBuf::from("missing.json"),
    };

    assert_eq!(err.to_string(), "the file 'missing.json' was not found");
    assert_eq!(err.path(), Path::new("missing.json"));
    assert!(err.is_not_found());
    assert!(err.hint().contains("file name is correct"));
  }

  #[test]
  fn malformed_displays_the_parser_message() {
    let err = malformed("{ not json");

    assert!(err.to_string().contains("line 1"), "unexpected message: {err}");
    assert!(!err.is_not_found());
    assert_eq!(err.hint(), "Make sure the JSON file is not corrupted.");
  }

  #[test]
  fn read_failures_share_the_corruption_hint() {
    let err = CredentialError::Read {
      path: PathBuf::from("key.json"),
      source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    assert_eq!(err.to_string(), "failed to read 'key.json': permission denied");
    assert_eq!(err.hint(), malformed("[").hint());
  }
}

//! # Dotenv Rendering
//!
//! Turns credential fields into `NAME="value"` assignment lines and wraps them
//! in the copy-paste block printed by `fbenv`. Values are interpolated
//! verbatim, in the form picked by [`NewlineStyle`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Variable prefix used when none is given
pub const DEFAULT_PREFIX: &str = "FIREBASE";

/// Opening line of the copy-paste block
pub const BANNER: &str = "--- COPY AND PASTE THESE LINES INTO YOUR .env FILE (BACKEND) ---";

/// Static reminders printed after the block
pub const REMINDERS: [&str; 2] = [
  "Remember to delete the old .env file and create a new one with this content.",
  "And make sure 'require('dotenv').config();' is the first line of your index.js.",
];

static PREFIX_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Failed to compile env prefix regex"));

/// Error returned for a prefix that cannot start an environment variable name
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid variable prefix '{0}': use letters, digits and underscores, and do not start with a digit")]
pub struct InvalidPrefix(pub String);

/// Prefix shared by the generated variable names, e.g. `FIREBASE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPrefix(String);

impl EnvPrefix {
  /// Create a prefix, rejecting anything that is not a valid variable name
  pub fn new(prefix: impl Into<String>) -> Result<Self, InvalidPrefix> {
    let prefix = prefix.into();
    if PREFIX_PATTERN.is_match(&prefix) {
      Ok(Self(prefix))
    } else {
      Err(InvalidPrefix(prefix))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Full variable name for a field suffix, e.g. `FIREBASE_PROJECT_ID`
  pub fn variable(&self, suffix: &str) -> String {
    format!("{}_{suffix}", self.0)
  }
}

impl Default for EnvPrefix {
  fn default() -> Self {
    Self(DEFAULT_PREFIX.to_string())
  }
}

impl FromStr for EnvPrefix {
  type Err = InvalidPrefix;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::new(s)
  }
}

impl fmt::Display for EnvPrefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Which form of a field value is written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewlineStyle {
  /// The text between the quotes in the key file, escapes included. A PEM key
  /// stays on one line with `\n` sequences, and every JSON escape (`\"`,
  /// `\r`, `\u00e9`, ...) is kept as written.
  #[default]
  Escaped,
  /// The decoded value, so a PEM key spans several lines
  Literal,
}

/// A single `NAME="value"` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
  pub name: String,
  pub value: String,
}

impl EnvAssignment {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}

impl fmt::Display for EnvAssignment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}=\"{}\"", self.name, self.value)
  }
}

/// The copy-paste block printed on success
///
/// The full rendering is a blank line, [`BANNER`], one line per assignment, a
/// dashed closing line as wide as the banner, a blank line and the
/// [`REMINDERS`]. The bare rendering is the assignment lines alone.
#[derive(Debug, Clone, Copy)]
pub struct EnvBlock<'a> {
  assignments: &'a [EnvAssignment],
}

impl<'a> EnvBlock<'a> {
  pub fn new(assignments: &'a [EnvAssignment]) -> Self {
    Self { assignments }
  }

  /// Render the block with banners and reminders
  pub fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    self.render_bare(out)?;
    writeln!(out, "{}", "-".repeat(BANNER.chars().count()))?;
    writeln!(out)?;
    for reminder in REMINDERS {
      writeln!(out, "{reminder}")?;
    }
    Ok(())
  }

  /// Render only the assignment lines
  pub fn render_bare<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
    for assignment in self.assignments {
      writeln!(out, "{assignment}")?;
    }
    Ok(())
  }
}

//! # Output Formatting
//!
//! Diagnostic lines with emoji markers and optional colors. Everything is
//! written to the caller's writer (stdout in the binary), since diagnostics
//! share the stream with the assignment lines.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as the global owo-colors override
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Leave detection to owo-colors
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Colored emoji marker followed by a space, or nothing when colors are off
///
/// The marker is decoration only, so plain output (`--colors never`, pipes)
/// carries just the message.
fn marker(shortcode: &str, fallback: &str, paint: impl Fn(&str) -> String) -> String {
  let emoji = get_emoji_or_default(shortcode, fallback);
  ""
    .if_supports_color(Stream::Stdout, |_| format!("{} ", paint(&emoji)))
    .to_string()
}

/// Write an error line
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
  let cross = marker("x", "\u{2717}", |emoji| emoji.red().bold().to_string());
  writeln!(out, "{cross}{message}")
}

/// Write a remediation hint
pub fn write_hint<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
  let bulb = marker("bulb", "\u{bb}", |emoji| emoji.yellow().to_string());
  writeln!(out, "{bulb}{message}")
}

//! # Credential Formatting
//!
//! Loads the key file, renders the `.env` block and writes either the block
//! or a diagnostic. Output is all-or-nothing: the block is rendered in full
//! before anything is written.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fbenv_core::{CredentialError, EnvBlock, EnvPrefix, NewlineStyle, load_service_account};
use tracing::debug;

use crate::output::{write_error, write_hint};

/// What to read and how to render it
#[derive(Debug, Clone)]
pub struct FormatOptions {
  pub path: PathBuf,
  pub prefix: EnvPrefix,
  pub newline_style: NewlineStyle,
  pub bare: bool,
}

/// Result of a formatting run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
  /// The assignment block was printed
  Printed,
  /// A diagnostic was printed instead
  Failed,
}

/// Format the credentials described by `options` into `out`
///
/// Credential problems are reported to `out` and yield
/// [`FormatOutcome::Failed`]; only failures to write the output itself are
/// returned as errors.
pub fn format_credentials<W: Write>(options: &FormatOptions, out: &mut W) -> Result<FormatOutcome> {
  let key = match load_service_account(&options.path) {
    Ok(key) => key,
    Err(err) => {
      debug!("Could not use {}: {}", err.path().display(), err);
      report_credential_error(out, &err)?;
      return Ok(FormatOutcome::Failed);
    }
  };

  let assignments = key.assignments(&options.prefix, options.newline_style);
  let block = EnvBlock::new(&assignments);

  let mut rendered = String::new();
  let render_result = if options.bare {
    block.render_bare(&mut rendered)
  } else {
    block.render(&mut rendered)
  };
  render_result.context("Failed to render .env block")?;

  debug!("Writing {} assignments", assignments.len());
  out
    .write_all(rendered.as_bytes())
    .and_then(|()| out.flush())
    .context("Failed to write .env block")?;

  Ok(FormatOutcome::Printed)
}

fn report_credential_error<W: Write>(out: &mut W, err: &CredentialError) -> Result<()> {
  let message = if err.is_not_found() {
    format!("Error: {err}.")
  } else {
    format!("Error processing the JSON file: {err}")
  };

  write_error(out, &message)
    .and_then(|()| write_hint(out, err.hint()))
    .and_then(|()| out.flush())
    .context("Failed to write diagnostic")
}

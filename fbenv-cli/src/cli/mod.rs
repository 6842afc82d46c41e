//! # Command Line Interface
//!
//! Defines the arguments of the fbenv tool and hands them to the formatter.

mod format;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use fbenv_core::{DEFAULT_CREDENTIALS_PATH, DEFAULT_PREFIX, EnvPrefix, NewlineStyle};
pub use format::{FormatOptions, FormatOutcome, format_credentials};

use crate::output::ColorMode;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Top-level CLI command for the fbenv tool
#[derive(Parser, Debug)]
#[command(name = "fbenv")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Print service-account credentials as .env assignments")]
#[command(
  long_about = "Reads a service-account key file (JSON) and prints its project id, private key\n\
        and client email as .env assignments, ready to copy into your backend's .env file.\n\n\
        Nothing is written to disk. Problems with the key file are reported on stdout\n\
        and the exit status stays 0 unless --strict is given."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightYellow.on_default().bold().underline())
    .usage(AnsiColor::Yellow.on_default().bold())
    .literal(AnsiColor::BrightYellow.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Path to the service-account key file
  #[arg(value_name = "PATH", default_value = DEFAULT_CREDENTIALS_PATH)]
  pub path: PathBuf,

  /// Prefix for the generated variable names
  #[arg(
    long,
    value_name = "PREFIX",
    default_value = DEFAULT_PREFIX,
    long_help = "Prefix for the generated variable names.\n\n\
             The variables are named <PREFIX>_PROJECT_ID, <PREFIX>_PRIVATE_KEY and\n\
             <PREFIX>_CLIENT_EMAIL. Letters, digits and underscores only."
  )]
  pub prefix: EnvPrefix,

  /// Print decoded values, with real newlines in the key, instead of the file text
  #[arg(long)]
  pub literal_newlines: bool,

  /// Print only the assignment lines, without banners or reminders
  #[arg(long)]
  pub bare: bool,

  /// Exit with a non-zero status when the key file cannot be used
  #[arg(long)]
  pub strict: bool,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Formatter options described by these arguments
  pub fn format_options(&self) -> FormatOptions {
    FormatOptions {
      path: self.path.clone(),
      prefix: self.prefix.clone(),
      newline_style: if self.literal_newlines {
        NewlineStyle::Literal
      } else {
        NewlineStyle::Escaped
      },
      bare: self.bare,
    }
  }
}

pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  cli.colors.apply();

  let options = cli.format_options();
  let stdout = io::stdout();
  let mut out = stdout.lock();

  match format_credentials(&options, &mut out)? {
    FormatOutcome::Printed => Ok(ExitCode::SUCCESS),
    FormatOutcome::Failed if cli.strict => Ok(ExitCode::FAILURE),
    FormatOutcome::Failed => Ok(ExitCode::SUCCESS),
  }
}

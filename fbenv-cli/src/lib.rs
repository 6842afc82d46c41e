//! # fbenv CLI Library
//!
//! Argument parsing, diagnostics and output for the `fbenv` command-line
//! tool, which prints service-account credentials as `.env` assignments.

pub mod cli;
pub mod output;

//! Build script for the fbenv CLI
//!
//! Embeds the git commit hash so `fbenv --version` can report it

use std::env;
use std::path::Path;
use std::process::Command;

/// Entry point for the build script.
fn main() {
  embed_git_hash();
  set_rerun_conditions();
}

/// Exposes the short commit hash as `GIT_HASH`, or `unknown` outside a git
/// checkout or without git installed.
fn embed_git_hash() {
  let git_hash = Command::new("git")
    .args(["rev-parse", "--short", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|hash| hash.trim().to_string())
    .filter(|hash| !hash.is_empty())
    .unwrap_or_else(|| "unknown".to_string());

  println!("cargo:rustc-env=GIT_HASH={git_hash}");
}

/// Watching a path that does not exist makes cargo rerun the script on every
/// build, so `.git/HEAD` is only watched inside a checkout.
fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");

  let git_head = env::var_os("CARGO_MANIFEST_DIR")
    .map(|dir| Path::new(&dir).join("../.git/HEAD"))
    .filter(|head| head.exists());
  if let Some(head) = git_head {
    println!("cargo:rerun-if-changed={}", head.display());
  }
}

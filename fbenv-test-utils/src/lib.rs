//! Test utilities shared across the fbenv workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary credential files ([`CredentialFileGuard`])
//! - Sample service-account key contents ([`fixtures`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod credential_file;
pub mod fixtures;

// Re-export commonly used items
pub use credential_file::CredentialFileGuard;
pub use fixtures::{
  MINIMAL_SERVICE_ACCOUNT, full_service_account, full_service_account_value, json_text, service_account_with_json_text,
  service_account_without,
};

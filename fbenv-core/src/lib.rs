//! # fbenv Core Library
//!
//! Loads service-account key files and renders the fields a backend needs as
//! `.env` assignments. The `fbenv` binary is a thin shell around this crate:
//! it resolves arguments, prints what this crate renders, and reports
//! [`CredentialError`]s to the user.

pub mod credentials;
pub mod dotenv;
pub mod error;

pub use credentials::{DEFAULT_CREDENTIALS_PATH, FieldValue, ServiceAccountKey, load_service_account, parse_service_account};
pub use dotenv::{DEFAULT_PREFIX, EnvAssignment, EnvBlock, EnvPrefix, InvalidPrefix, NewlineStyle};
pub use error::CredentialError;

//! Application configuration module.
//!
//! Validates command-line and environment settings into an
//! immutable `AppConfig` before any network access.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;

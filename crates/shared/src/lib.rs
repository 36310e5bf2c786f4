//! Shared errors and configuration for the OPEX variance toolkit.
//!
//! This crate provides the pieces every binary needs:
//! - Application-wide error type with process exit codes
//! - Layered configuration (files, environment, defaults)

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

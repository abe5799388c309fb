//! Utility modules for certinfo
//!
//! This module contains the error types shared by the library and the CLI.

pub mod error;

pub use error::{CertificateError, ConfigError, InputError, Result, ToolkitError};

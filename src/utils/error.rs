//! Custom error types for certinfo
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of reading, parsing and reporting on certificates.
//!
//! Parse failures are never fatal to a batch: they are rendered as
//! placeholder lines. Only input and configuration errors abort a run.

use thiserror::Error;

/// Top-level error type for certinfo
///
/// Covers the failures that abort a run. Parse failures of individual
/// candidates are not among them.
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Certificate parsing errors
///
/// The `Display` text of these values is what ends up after
/// `not a certificate:` in a report, so it stays short and single-line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    #[error("{message}")]
    Der { message: String },

    #[error("x509: {len} bytes of trailing data after certificate")]
    TrailingData { len: usize },

    #[error("x509: invalid timestamp in validity period")]
    InvalidTimestamp,
}

impl From<x509_parser::error::X509Error> for CertificateError {
    fn from(err: x509_parser::error::X509Error) -> Self {
        CertificateError::Der {
            message: format!("x509: {}", err),
        }
    }
}

impl From<x509_parser::nom::Err<x509_parser::error::X509Error>> for CertificateError {
    fn from(err: x509_parser::nom::Err<x509_parser::error::X509Error>) -> Self {
        let message = match err {
            x509_parser::nom::Err::Incomplete(_) => "x509: truncated certificate data".to_string(),
            x509_parser::nom::Err::Error(e) | x509_parser::nom::Err::Failure(e) => {
                format!("x509: {}", e)
            }
        };
        CertificateError::Der { message }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Errors obtaining the raw input blob
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {message}")]
    FileReadError { path: String, message: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;

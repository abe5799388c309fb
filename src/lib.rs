//! certinfo library
//!
//! Turns a blob of certificate bytes into a human-readable report:
//! - Framing of PEM bundles and bare DER input into parsing candidates
//! - X.509 parsing into a flat certificate record
//! - Deterministic, line-oriented rendering of every certificate found
//!
//! Candidates that fail to parse are reported inline and never abort the
//! batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use certinfo::render_all;
//!
//! let bundle = std::fs::read("chain.pem")?;
//! println!("{}", render_all(&bundle));
//! ```

pub mod cert_ops;
pub mod certificate;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use cert_ops::{frame, render_all, Candidate, CertificateAnalyzer};
pub use certificate::{CertificateParser, FingerprintHasher};
pub use cli::Cli;
pub use config::Settings;
pub use models::{CandidateSource, ParsedCertificate, Report, ReportEntry, ReportSet};
pub use utils::{Result, ToolkitError};

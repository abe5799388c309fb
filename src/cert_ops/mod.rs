//! Certificate blob operations
//!
//! Framing of PEM/DER input and batch orchestration of parse + report.

pub mod reader;
pub mod runner;

pub use reader::{frame, read_input, Candidate};
pub use runner::{render_all, CertificateAnalyzer};

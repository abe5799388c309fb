//! Report generation module
//!
//! Turns parsed certificates into fixed-order, labeled text reports.

pub mod format;
pub mod text;

pub use format::hex_colon;
pub use text::CertificateReporter;

//! Data models for certinfo
//!
//! This module contains the parsed certificate record and the report types
//! built from it.

pub mod certificate;
pub mod report;

pub use certificate::{
    ExtKeyUsage, Extension, KeyUsage, ParsedCertificate, PublicKeyInfo, SubjectAltNames,
};
pub use report::{
    CandidateSource, Report, ReportEntry, ReportField, ReportRow, ReportSet, LABEL_WIDTH,
};

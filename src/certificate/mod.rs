//! Certificate decoding capabilities
//!
//! The reporter only sees [`ParsedCertificate`](crate::models::ParsedCertificate)
//! values; decoding and digesting sit behind the [`CertificateParser`] and
//! [`FingerprintHasher`] traits so either can be swapped for a fake.

pub mod fingerprint;
pub mod names;
pub mod parser;

pub use fingerprint::{FingerprintHasher, Sha256Hasher};
pub use parser::{CertificateParser, X509CertificateParser};

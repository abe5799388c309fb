//! Batch orchestration
//!
//! Frames a blob, parses every candidate and renders the numbered report
//! set. Parse failures are reported inline and never stop the batch.

use crate::cert_ops::reader;
use crate::certificate::{
    CertificateParser, FingerprintHasher, Sha256Hasher, X509CertificateParser,
};
use crate::models::ReportSet;
use crate::report::CertificateReporter;
use tracing::{debug, warn};

/// Parses and reports on every certificate in a blob
#[derive(Debug, Clone, Default)]
pub struct CertificateAnalyzer<P, H> {
    parser: P,
    reporter: CertificateReporter<H>,
}

impl CertificateAnalyzer<X509CertificateParser, Sha256Hasher> {
    /// Analyzer using x509-parser and SHA-256 fingerprints
    pub fn new() -> Self {
        Self::with_capabilities(X509CertificateParser, Sha256Hasher)
    }
}

impl<P: CertificateParser, H: FingerprintHasher> CertificateAnalyzer<P, H> {
    pub fn with_capabilities(parser: P, hasher: H) -> Self {
        Self {
            parser,
            reporter: CertificateReporter::new(hasher),
        }
    }

    /// Build one entry per candidate, numbered from 1 in input order
    pub fn analyze(&self, raw: &[u8]) -> ReportSet {
        let candidates = reader::frame(raw);
        debug!(candidates = candidates.len(), "Framed input");

        let entries = candidates
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| {
                let index = i + 1;
                let parsed = self.parser.parse(&candidate.der);
                match &parsed {
                    Ok(cert) => debug!(
                        index,
                        source = %candidate.source,
                        subject = %cert.subject,
                        "Parsed candidate"
                    ),
                    Err(e) => warn!(
                        index,
                        source = %candidate.source,
                        error = %e,
                        "Candidate is not a certificate"
                    ),
                }
                self.reporter.report(index, candidate.source, &parsed)
            })
            .collect();

        ReportSet { entries }
    }

    /// Render every candidate, separated by blank lines
    pub fn render_all(&self, raw: &[u8]) -> String {
        self.analyze(raw).to_string()
    }
}

/// Render a blob with the default parser and hasher
pub fn render_all(raw: &[u8]) -> String {
    CertificateAnalyzer::new().render_all(raw)
}

//! Certificate report rendering
//!
//! A report is produced by running a fixed table of field renderers over a
//! [`ParsedCertificate`]. Each renderer returns `None` (or an empty string)
//! when its source field is absent, in which case the line is omitted. The
//! table order is the report order.

use crate::certificate::FingerprintHasher;
use crate::models::{CandidateSource, ParsedCertificate, Report, ReportEntry, ReportField};
use crate::report::format::{hex_colon, name_to_one_line, safe_uri, sanitize};
use crate::utils::CertificateError;
use chrono::SecondsFormat;

/// Everything a field renderer may look at
pub struct FieldInput<'a> {
    pub cert: &'a ParsedCertificate,
    pub fingerprint: &'a [u8],
}

type RenderFn = fn(&FieldInput<'_>) -> Option<String>;

/// One row of the rendering pipeline
struct FieldSpec {
    group: Option<&'static str>,
    label: &'static str,
    render: RenderFn,
}

const fn field(label: &'static str, render: RenderFn) -> FieldSpec {
    FieldSpec {
        group: None,
        label,
        render,
    }
}

const fn grouped(group: &'static str, label: &'static str, render: RenderFn) -> FieldSpec {
    FieldSpec {
        group: Some(group),
        label,
        render,
    }
}

const PIPELINE: &[FieldSpec] = &[
    field("Subject", subject),
    field("Issuer", issuer),
    field("Serial", serial),
    field("Version", version),
    field("Signature Algorithm", signature_algorithm),
    field("Public Key", public_key),
    grouped("Validity", "Not Before", not_before),
    grouped("Validity", "Not After", not_after),
    field("Is CA", is_ca),
    field("Path Len", path_len),
    field("Key Usage", key_usage),
    field("Extended Key Usage", extended_key_usage),
    field("Subject Alt Names", subject_alt_names),
    field("Subject Key ID", subject_key_id),
    field("Authority Key ID", authority_key_id),
    field("OCSP", ocsp_servers),
    field("CRL Distribution", crl_distribution_points),
    field("AIA Issuer URL", issuing_certificate_urls),
    field("Policy OIDs", policy_identifiers),
    field("Fingerprint SHA-256", fingerprint),
    field("Extensions", extensions),
    field("Can Verify Chains", can_verify_chains),
];

/// Renders parsed certificates into reports
#[derive(Debug, Clone, Default)]
pub struct CertificateReporter<H> {
    hasher: H,
}

impl<H: FingerprintHasher> CertificateReporter<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Build the report for one certificate
    pub fn build(&self, cert: &ParsedCertificate) -> Report {
        let fingerprint = self.hasher.digest(&cert.raw);
        let input = FieldInput {
            cert,
            fingerprint: &fingerprint,
        };

        let fields = PIPELINE
            .iter()
            .filter_map(|spec| {
                let value = (spec.render)(&input).filter(|v| !v.is_empty())?;
                Some(ReportField {
                    group: spec.group,
                    label: spec.label,
                    value: sanitize(&value).into_owned(),
                })
            })
            .collect();

        Report { fields }
    }

    /// Produce the entry for the candidate at `index` (1-based)
    ///
    /// A parse failure becomes a one-line placeholder; it never aborts the
    /// surrounding batch.
    pub fn report(
        &self,
        index: usize,
        source: CandidateSource,
        parsed: &Result<ParsedCertificate, CertificateError>,
    ) -> ReportEntry {
        match parsed {
            Ok(cert) => ReportEntry::Certificate {
                index,
                source,
                report: self.build(cert),
            },
            Err(err) => ReportEntry::Failure {
                index,
                source,
                message: sanitize(&err.to_string()).into_owned(),
            },
        }
    }
}

fn join<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn subject(input: &FieldInput<'_>) -> Option<String> {
    Some(name_to_one_line(&input.cert.subject))
}

fn issuer(input: &FieldInput<'_>) -> Option<String> {
    Some(name_to_one_line(&input.cert.issuer))
}

fn serial(input: &FieldInput<'_>) -> Option<String> {
    Some(hex_colon(&input.cert.serial))
}

fn version(input: &FieldInput<'_>) -> Option<String> {
    let version = input.cert.version;
    (version > 0).then(|| format!("{} (X.509v{})", version, version))
}

fn signature_algorithm(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.signature_algorithm.clone())
}

fn public_key(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.public_key.to_string())
}

fn not_before(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.not_before.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn not_after(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.not_after.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn is_ca(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.is_ca.to_string())
}

fn path_len(input: &FieldInput<'_>) -> Option<String> {
    match input.cert.max_path_len {
        Some(0) => Some("0 (MaxPathLenZero)".to_string()),
        Some(len) => Some(len.to_string()),
        None => None,
    }
}

fn key_usage(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.key_usage.names().join(", "))
}

fn extended_key_usage(input: &FieldInput<'_>) -> Option<String> {
    Some(join(&input.cert.extended_key_usage, ", "))
}

fn subject_alt_names(input: &FieldInput<'_>) -> Option<String> {
    let sans = &input.cert.subject_alt_names;
    if sans.is_empty() {
        return None;
    }
    let uris: Vec<_> = sans.uris.iter().map(|uri| safe_uri(uri)).collect();

    let groups = [
        ("DNS", join(&sans.dns_names, ",")),
        ("Email", join(&sans.email_addresses, ",")),
        ("IP", join(&sans.ip_addresses, ",")),
        ("URI", join(&uris, ",")),
    ];

    let rendered: Vec<String> = groups
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(kind, values)| format!("{}={}", kind, values))
        .collect();

    Some(rendered.join(" | "))
}

fn subject_key_id(input: &FieldInput<'_>) -> Option<String> {
    Some(hex_colon(&input.cert.subject_key_id))
}

fn authority_key_id(input: &FieldInput<'_>) -> Option<String> {
    Some(hex_colon(&input.cert.authority_key_id))
}

fn ocsp_servers(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.ocsp_servers.join(", "))
}

fn crl_distribution_points(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.crl_distribution_points.join(", "))
}

fn issuing_certificate_urls(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.issuing_certificate_urls.join(", "))
}

fn policy_identifiers(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.policy_identifiers.join(", "))
}

fn fingerprint(input: &FieldInput<'_>) -> Option<String> {
    Some(hex_colon(input.fingerprint))
}

fn extensions(input: &FieldInput<'_>) -> Option<String> {
    let rendered: Vec<String> = input
        .cert
        .extensions
        .iter()
        .map(|ext| {
            if ext.critical {
                format!("{} (critical)", ext.oid)
            } else {
                ext.oid.clone()
            }
        })
        .collect();
    Some(rendered.join(", "))
}

/// Not chain validation; see [`ParsedCertificate::can_verify_chains`]
fn can_verify_chains(input: &FieldInput<'_>) -> Option<String> {
    Some(input.cert.can_verify_chains().to_string())
}

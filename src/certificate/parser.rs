//! Certificate parsing
//!
//! Decodes DER certificates using x509-parser and lifts every field the
//! report needs into a [`ParsedCertificate`].

use crate::certificate::names;
use crate::models::{ExtKeyUsage, Extension, KeyUsage, ParsedCertificate, PublicKeyInfo};
use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use std::net::IpAddr;
use tracing::debug;
use x509_parser::oid_registry;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

/// DER decoding capability
pub trait CertificateParser: Send + Sync {
    /// Parse one DER-encoded certificate
    fn parse(&self, der: &[u8]) -> Result<ParsedCertificate, CertificateError>;
}

/// Parser backed by x509-parser
#[derive(Debug, Clone, Copy, Default)]
pub struct X509CertificateParser;

impl X509CertificateParser {
    pub fn new() -> Self {
        Self
    }
}

impl CertificateParser for X509CertificateParser {
    fn parse(&self, der: &[u8]) -> Result<ParsedCertificate, CertificateError> {
        let (rest, cert) = X509Certificate::from_der(der)?;
        if !rest.is_empty() {
            return Err(CertificateError::TrailingData { len: rest.len() });
        }

        let (is_ca, max_path_len) = match cert.basic_constraints()? {
            Some(bc) => (bc.value.ca, bc.value.path_len_constraint),
            None => (false, None),
        };

        let key_usage = cert
            .key_usage()?
            .map(|ku| key_usage_flags(ku.value))
            .unwrap_or_default();

        let extended_key_usage =
            match cert.get_extension_unique(&oid_registry::OID_X509_EXT_EXTENDED_KEY_USAGE)? {
                Some(ext) => ext_key_usages(ext.value)?,
                None => Vec::new(),
            };

        let mut parsed = ParsedCertificate {
            subject: cert.subject().to_string(),
            issuer: cert.issuer().to_string(),
            serial: strip_leading_zeros(cert.raw_serial()).to_vec(),
            version: cert.version().0 + 1,
            signature_algorithm: names::signature_algorithm_name(
                &cert.signature_algorithm.algorithm.to_id_string(),
            ),
            public_key: public_key_info(cert.public_key()),
            not_before: asn1_time_to_datetime(cert.validity().not_before)?,
            not_after: asn1_time_to_datetime(cert.validity().not_after)?,
            is_ca,
            max_path_len,
            key_usage,
            extended_key_usage,
            raw: der.to_vec(),
            ..Default::default()
        };

        if let Some(san) = cert.subject_alternative_name()? {
            collect_subject_alt_names(&san.value.general_names, &mut parsed);
        }

        for ext in cert.extensions() {
            parsed
                .extensions
                .push(Extension::new(ext.oid.to_id_string(), ext.critical));
            collect_extension(ext.parsed_extension(), &mut parsed);
        }

        debug!(
            subject = %parsed.subject,
            extensions = parsed.extensions.len(),
            "Parsed certificate"
        );

        Ok(parsed)
    }
}

fn collect_subject_alt_names(general_names: &[GeneralName], parsed: &mut ParsedCertificate) {
    let sans = &mut parsed.subject_alt_names;
    for name in general_names {
        match name {
            GeneralName::DNSName(dns) => sans.dns_names.push(dns.to_string()),
            GeneralName::RFC822Name(email) => sans.email_addresses.push(email.to_string()),
            GeneralName::URI(uri) => sans.uris.push(uri.to_string()),
            GeneralName::IPAddress(bytes) => match ip_from_bytes(bytes) {
                Some(ip) => sans.ip_addresses.push(ip),
                None => debug!(len = bytes.len(), "Skipping IP SAN with odd length"),
            },
            _ => {}
        }
    }
}

fn collect_extension(extension: &ParsedExtension, parsed: &mut ParsedCertificate) {
    match extension {
        ParsedExtension::SubjectKeyIdentifier(kid) => {
            parsed.subject_key_id = kid.0.to_vec();
        }
        ParsedExtension::AuthorityKeyIdentifier(aki) => {
            if let Some(kid) = &aki.key_identifier {
                parsed.authority_key_id = kid.0.to_vec();
            }
        }
        ParsedExtension::AuthorityInfoAccess(aia) => {
            for desc in &aia.accessdescs {
                let GeneralName::URI(uri) = &desc.access_location else {
                    continue;
                };
                match desc.access_method.to_id_string().as_str() {
                    names::OID_ACCESS_OCSP => parsed.ocsp_servers.push(uri.to_string()),
                    names::OID_ACCESS_CA_ISSUERS => {
                        parsed.issuing_certificate_urls.push(uri.to_string())
                    }
                    _ => {}
                }
            }
        }
        ParsedExtension::CRLDistributionPoints(cdp) => {
            for dp in &cdp.points {
                if let Some(DistributionPointName::FullName(full_names)) = &dp.distribution_point {
                    for name in full_names {
                        if let GeneralName::URI(uri) = name {
                            parsed.crl_distribution_points.push(uri.to_string());
                        }
                    }
                }
            }
        }
        ParsedExtension::CertificatePolicies(policies) => {
            for policy in policies.iter() {
                parsed
                    .policy_identifiers
                    .push(policy.policy_id.to_id_string());
            }
        }
        _ => {}
    }
}

fn key_usage_flags(ku: &x509_parser::extensions::KeyUsage) -> KeyUsage {
    let checks = [
        (ku.digital_signature(), KeyUsage::DIGITAL_SIGNATURE),
        (ku.non_repudiation(), KeyUsage::CONTENT_COMMITMENT),
        (ku.key_encipherment(), KeyUsage::KEY_ENCIPHERMENT),
        (ku.data_encipherment(), KeyUsage::DATA_ENCIPHERMENT),
        (ku.key_agreement(), KeyUsage::KEY_AGREEMENT),
        (ku.key_cert_sign(), KeyUsage::CERT_SIGN),
        (ku.crl_sign(), KeyUsage::CRL_SIGN),
        (ku.encipher_only(), KeyUsage::ENCIPHER_ONLY),
        (ku.decipher_only(), KeyUsage::DECIPHER_ONLY),
    ];

    checks
        .into_iter()
        .filter(|(set, _)| *set)
        .fold(KeyUsage::empty(), |acc, (_, flag)| acc | flag)
}

/// Purposes in encoded order, decoded from the raw extension value
///
/// x509-parser's typed view folds well-known purposes into flags, losing
/// their order and any repeats.
fn ext_key_usages(value: &[u8]) -> Result<Vec<ExtKeyUsage>, CertificateError> {
    let invalid = |e: &dyn std::fmt::Display| CertificateError::Der {
        message: format!("x509: invalid extended key usage: {}", e),
    };

    let (_, obj) = x509_parser::der_parser::parse_der(value).map_err(|e| invalid(&e))?;
    obj.as_sequence()
        .map_err(|e| invalid(&e))?
        .iter()
        .map(|item| {
            item.as_oid()
                .map(|oid| names::ext_key_usage(&oid.to_id_string()))
                .map_err(|e| invalid(&e))
        })
        .collect()
}

fn public_key_info(spki: &SubjectPublicKeyInfo) -> PublicKeyInfo {
    let algorithm = spki.algorithm.algorithm.to_id_string();
    if algorithm == names::OID_ED25519 {
        return PublicKeyInfo::Ed25519;
    }

    match spki.parsed() {
        Ok(PublicKey::RSA(rsa)) => PublicKeyInfo::Rsa {
            bits: bit_length(rsa.modulus),
        },
        Ok(PublicKey::EC(_)) => PublicKeyInfo::Ecdsa {
            curve: named_curve(spki),
        },
        _ if algorithm == names::OID_EC_PUBLIC_KEY => PublicKeyInfo::Ecdsa {
            curve: named_curve(spki),
        },
        _ => PublicKeyInfo::Other(names::key_algorithm_tag(&algorithm)),
    }
}

/// EC keys carry their named curve as the algorithm parameter
fn named_curve(spki: &SubjectPublicKeyInfo) -> Option<String> {
    let params = spki.algorithm.parameters.as_ref()?;
    let oid = params.as_oid().ok()?;
    names::curve_name(&oid.to_id_string()).map(str::to_string)
}

fn ip_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    if let Ok(v4) = <[u8; 4]>::try_from(bytes) {
        return Some(IpAddr::from(v4));
    }
    <[u8; 16]>::try_from(bytes).ok().map(IpAddr::from)
}

fn strip_leading_zeros(mut bytes: &[u8]) -> &[u8] {
    while let Some((&0u8, rest)) = bytes.split_first() {
        bytes = rest;
    }
    bytes
}

/// Number of significant bits in a big-endian unsigned integer
fn bit_length(magnitude: &[u8]) -> u32 {
    let trimmed = strip_leading_zeros(magnitude);
    match trimmed.first() {
        Some(first) => (trimmed.len() as u32 - 1) * 8 + (8 - first.leading_zeros()),
        None => 0,
    }
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or(CertificateError::InvalidTimestamp)
}

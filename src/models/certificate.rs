//! Parsed certificate types
//!
//! `ParsedCertificate` is the record a [`CertificateParser`] hands to the
//! reporter. It holds plain owned data so reports can be built from fakes in
//! tests just as well as from real DER.
//!
//! [`CertificateParser`]: crate::certificate::CertificateParser

use bitflags::bitflags;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::IpAddr;

/// Public key algorithm and its size/curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyInfo {
    /// RSA key with the modulus bit length
    Rsa { bits: u32 },
    /// ECDSA key; `None` when the named curve is not recognised
    Ecdsa { curve: Option<String> },
    Ed25519,
    /// Any other key type, carrying a descriptive type tag
    Other(String),
}

impl Default for PublicKeyInfo {
    fn default() -> Self {
        PublicKeyInfo::Other(String::new())
    }
}

impl fmt::Display for PublicKeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicKeyInfo::Rsa { bits } => write!(f, "RSA ({} bits)", bits),
            PublicKeyInfo::Ecdsa { curve: Some(curve) } => write!(f, "ECDSA ({})", curve),
            PublicKeyInfo::Ecdsa { curve: None } => write!(f, "ECDSA"),
            PublicKeyInfo::Ed25519 => write!(f, "Ed25519"),
            PublicKeyInfo::Other(tag) if tag.is_empty() => write!(f, "Unknown"),
            PublicKeyInfo::Other(tag) => write!(f, "{}", tag),
        }
    }
}

bitflags! {
    /// Key usage bits (RFC 5280 4.2.1.3)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyUsage: u16 {
        const DIGITAL_SIGNATURE = 1 << 0;
        const CONTENT_COMMITMENT = 1 << 1;
        const KEY_ENCIPHERMENT = 1 << 2;
        const DATA_ENCIPHERMENT = 1 << 3;
        const KEY_AGREEMENT = 1 << 4;
        const CERT_SIGN = 1 << 5;
        const CRL_SIGN = 1 << 6;
        const ENCIPHER_ONLY = 1 << 7;
        const DECIPHER_ONLY = 1 << 8;
    }
}

impl KeyUsage {
    /// Bit-check order and display name of every usage bit
    pub const NAMED: [(KeyUsage, &'static str); 9] = [
        (KeyUsage::DIGITAL_SIGNATURE, "DigitalSignature"),
        (KeyUsage::CONTENT_COMMITMENT, "ContentCommitment"),
        (KeyUsage::KEY_ENCIPHERMENT, "KeyEncipherment"),
        (KeyUsage::DATA_ENCIPHERMENT, "DataEncipherment"),
        (KeyUsage::KEY_AGREEMENT, "KeyAgreement"),
        (KeyUsage::CERT_SIGN, "CertSign"),
        (KeyUsage::CRL_SIGN, "CRLSign"),
        (KeyUsage::ENCIPHER_ONLY, "EncipherOnly"),
        (KeyUsage::DECIPHER_ONLY, "DecipherOnly"),
    ];

    /// Names of the set bits, in bit-check order
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Extended key usage purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtKeyUsage {
    Any,
    ServerAuth,
    ClientAuth,
    CodeSigning,
    EmailProtection,
    IpsecEndSystem,
    IpsecTunnel,
    IpsecUser,
    TimeStamping,
    OcspSigning,
    MicrosoftServerGatedCrypto,
    NetscapeServerGatedCrypto,
    /// Purpose not in the table, carrying its dotted-decimal OID
    Unknown(String),
}

impl fmt::Display for ExtKeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtKeyUsage::Any => "Any",
            ExtKeyUsage::ServerAuth => "ServerAuth",
            ExtKeyUsage::ClientAuth => "ClientAuth",
            ExtKeyUsage::CodeSigning => "CodeSigning",
            ExtKeyUsage::EmailProtection => "EmailProtection",
            ExtKeyUsage::IpsecEndSystem => "IPSECEndSystem",
            ExtKeyUsage::IpsecTunnel => "IPSECTunnel",
            ExtKeyUsage::IpsecUser => "IPSECUser",
            ExtKeyUsage::TimeStamping => "TimeStamping",
            ExtKeyUsage::OcspSigning => "OCSPSigning",
            ExtKeyUsage::MicrosoftServerGatedCrypto => "MS SGC",
            ExtKeyUsage::NetscapeServerGatedCrypto => "Netscape SGC",
            ExtKeyUsage::Unknown(oid) => return write!(f, "Unknown({})", oid),
        };
        write!(f, "{}", name)
    }
}

/// Subject Alternative Names, one typed list per kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectAltNames {
    pub dns_names: Vec<String>,
    pub email_addresses: Vec<String>,
    pub ip_addresses: Vec<IpAddr>,
    /// URIs exactly as encoded; credentials are stripped at render time
    pub uris: Vec<String>,
}

impl SubjectAltNames {
    pub fn is_empty(&self) -> bool {
        self.dns_names.is_empty()
            && self.email_addresses.is_empty()
            && self.ip_addresses.is_empty()
            && self.uris.is_empty()
    }
}

/// A raw extension entry as it appears in the certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Dotted-decimal object identifier
    pub oid: String,
    pub critical: bool,
}

impl Extension {
    pub fn new(oid: impl Into<String>, critical: bool) -> Self {
        Self {
            oid: oid.into(),
            critical,
        }
    }
}

/// A decoded X.509 certificate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCertificate {
    /// Subject distinguished name in comma-joined attribute form
    pub subject: String,
    /// Issuer distinguished name in comma-joined attribute form
    pub issuer: String,
    /// Big-endian magnitude of the serial number, without leading zero octets
    pub serial: Vec<u8>,
    /// X.509 version, 1-based (v3 certificates have version 3)
    pub version: u32,
    /// Human-readable signature algorithm name
    pub signature_algorithm: String,
    pub public_key: PublicKeyInfo,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub is_ca: bool,
    /// Basic constraints path length; `Some(0)` is an explicit zero, `None` is unset
    pub max_path_len: Option<u32>,
    pub key_usage: KeyUsage,
    pub extended_key_usage: Vec<ExtKeyUsage>,
    pub subject_alt_names: SubjectAltNames,
    pub subject_key_id: Vec<u8>,
    pub authority_key_id: Vec<u8>,
    pub ocsp_servers: Vec<String>,
    pub crl_distribution_points: Vec<String>,
    pub issuing_certificate_urls: Vec<String>,
    /// Dotted-decimal policy OIDs
    pub policy_identifiers: Vec<String>,
    /// Extensions in encoded order
    pub extensions: Vec<Extension>,
    /// The full DER encoding of the certificate
    pub raw: Vec<u8>,
}

impl ParsedCertificate {
    /// Heuristic: could this certificate plausibly anchor or extend a chain?
    ///
    /// True for CA certificates and for any certificate naming a DNS, IP or
    /// email identity. This is NOT chain validation and must not be used as a
    /// security signal; no signature, trust anchor or constraint is checked.
    pub fn can_verify_chains(&self) -> bool {
        self.is_ca
            || !self.subject_alt_names.dns_names.is_empty()
            || !self.subject_alt_names.ip_addresses.is_empty()
            || !self.subject_alt_names.email_addresses.is_empty()
    }
}

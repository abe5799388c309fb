//! Object identifier lookup tables
//!
//! Names follow the short forms used by most TLS tooling (`SHA256-RSA`,
//! `P-256`, ...). Unrecognised identifiers fall back to their dotted form.

use crate::models::ExtKeyUsage;

pub const OID_RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const OID_ED25519: &str = "1.3.101.112";

pub const OID_ACCESS_OCSP: &str = "1.3.6.1.5.5.7.48.1";
pub const OID_ACCESS_CA_ISSUERS: &str = "1.3.6.1.5.5.7.48.2";

const SIGNATURE_ALGORITHMS: &[(&str, &str)] = &[
    ("1.2.840.113549.1.1.2", "MD2-RSA"),
    ("1.2.840.113549.1.1.4", "MD5-RSA"),
    ("1.2.840.113549.1.1.5", "SHA1-RSA"),
    ("1.2.840.113549.1.1.11", "SHA256-RSA"),
    ("1.2.840.113549.1.1.12", "SHA384-RSA"),
    ("1.2.840.113549.1.1.13", "SHA512-RSA"),
    ("1.2.840.113549.1.1.14", "SHA224-RSA"),
    (OID_RSASSA_PSS, "RSASSA-PSS"),
    ("1.2.840.10040.4.3", "DSA-SHA1"),
    ("2.16.840.1.101.3.4.3.2", "DSA-SHA256"),
    ("1.2.840.10045.4.1", "ECDSA-SHA1"),
    ("1.2.840.10045.4.3.1", "ECDSA-SHA224"),
    ("1.2.840.10045.4.3.2", "ECDSA-SHA256"),
    ("1.2.840.10045.4.3.3", "ECDSA-SHA384"),
    ("1.2.840.10045.4.3.4", "ECDSA-SHA512"),
    (OID_ED25519, "Ed25519"),
    ("1.3.101.113", "Ed448"),
];

const NAMED_CURVES: &[(&str, &str)] = &[
    ("1.2.840.10045.3.1.7", "P-256"),
    ("1.3.132.0.33", "P-224"),
    ("1.3.132.0.34", "P-384"),
    ("1.3.132.0.35", "P-521"),
    ("1.3.132.0.10", "secp256k1"),
    ("1.3.36.3.3.2.8.1.1.7", "brainpoolP256r1"),
    ("1.3.36.3.3.2.8.1.1.11", "brainpoolP384r1"),
    ("1.3.36.3.3.2.8.1.1.13", "brainpoolP512r1"),
];

const KEY_ALGORITHMS: &[(&str, &str)] = &[
    (OID_RSASSA_PSS, "RSASSA-PSS"),
    ("1.2.840.10040.4.1", "DSA"),
    ("1.2.840.10046.2.1", "DH"),
    ("1.3.101.110", "X25519"),
    ("1.3.101.111", "X448"),
    ("1.3.101.113", "Ed448"),
];

const EXT_KEY_USAGES: &[(&str, ExtKeyUsage)] = &[
    ("2.5.29.37.0", ExtKeyUsage::Any),
    ("1.3.6.1.5.5.7.3.1", ExtKeyUsage::ServerAuth),
    ("1.3.6.1.5.5.7.3.2", ExtKeyUsage::ClientAuth),
    ("1.3.6.1.5.5.7.3.3", ExtKeyUsage::CodeSigning),
    ("1.3.6.1.5.5.7.3.4", ExtKeyUsage::EmailProtection),
    ("1.3.6.1.5.5.7.3.5", ExtKeyUsage::IpsecEndSystem),
    ("1.3.6.1.5.5.7.3.6", ExtKeyUsage::IpsecTunnel),
    ("1.3.6.1.5.5.7.3.7", ExtKeyUsage::IpsecUser),
    ("1.3.6.1.5.5.7.3.8", ExtKeyUsage::TimeStamping),
    ("1.3.6.1.5.5.7.3.9", ExtKeyUsage::OcspSigning),
    ("1.3.6.1.4.1.311.10.3.3", ExtKeyUsage::MicrosoftServerGatedCrypto),
    ("2.16.840.1.113730.4.1", ExtKeyUsage::NetscapeServerGatedCrypto),
];

fn lookup<'a>(table: &'a [(&str, &'a str)], oid: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == oid)
        .map(|(_, name)| *name)
}

/// Human-readable signature algorithm, or the dotted OID when unknown
pub fn signature_algorithm_name(oid: &str) -> String {
    lookup(SIGNATURE_ALGORITHMS, oid)
        .map(str::to_string)
        .unwrap_or_else(|| oid.to_string())
}

/// Name of an EC named curve, if recognised
pub fn curve_name(oid: &str) -> Option<&'static str> {
    lookup(NAMED_CURVES, oid)
}

/// Type tag for a public key algorithm without a dedicated summary
pub fn key_algorithm_tag(oid: &str) -> String {
    lookup(KEY_ALGORITHMS, oid)
        .map(str::to_string)
        .unwrap_or_else(|| oid.to_string())
}

/// Map an extended key usage OID to its purpose
pub fn ext_key_usage(oid: &str) -> ExtKeyUsage {
    EXT_KEY_USAGES
        .iter()
        .find(|(candidate, _)| *candidate == oid)
        .map(|(_, usage)| usage.clone())
        .unwrap_or_else(|| ExtKeyUsage::Unknown(oid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_algorithm_names() {
        assert_eq!(signature_algorithm_name("1.2.840.113549.1.1.11"), "SHA256-RSA");
        assert_eq!(signature_algorithm_name("1.2.840.10045.4.3.2"), "ECDSA-SHA256");
        assert_eq!(signature_algorithm_name("1.2.3.4"), "1.2.3.4");
    }

    #[test]
    fn test_curve_names() {
        assert_eq!(curve_name("1.2.840.10045.3.1.7"), Some("P-256"));
        assert_eq!(curve_name("1.3.132.0.34"), Some("P-384"));
        assert_eq!(curve_name("1.2.3"), None);
    }

    #[test]
    fn test_ext_key_usage_lookup() {
        assert_eq!(ext_key_usage("1.3.6.1.5.5.7.3.1"), ExtKeyUsage::ServerAuth);
        assert_eq!(ext_key_usage("1.3.6.1.5.5.7.3.6"), ExtKeyUsage::IpsecTunnel);
        assert_eq!(
            ext_key_usage("2.16.840.1.113730.4.1"),
            ExtKeyUsage::NetscapeServerGatedCrypto
        );
        assert_eq!(
            ext_key_usage("1.3.6.1.4.1.99999.1"),
            ExtKeyUsage::Unknown("1.3.6.1.4.1.99999.1".to_string())
        );
    }
}

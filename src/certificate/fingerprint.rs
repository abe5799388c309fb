//! Certificate fingerprinting

use sha2::{Digest, Sha256};

/// Digest capability used for certificate fingerprints
pub trait FingerprintHasher: Send + Sync {
    /// Digest the full DER encoding of a certificate
    fn digest(&self, data: &[u8]) -> Vec<u8>;
}

/// SHA-256 fingerprints
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl FingerprintHasher for Sha256Hasher {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}

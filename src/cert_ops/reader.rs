//! Certificate blob reading and framing
//!
//! Splits an input blob into parsing candidates: the payload of every
//! certificate-labeled PEM block, or the whole blob as DER when there are
//! none.

use crate::models::CandidateSource;
use crate::utils::InputError;
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const END_MARKER: &[u8] = b"-----END ";
const DASHES: &[u8] = b"-----";
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// A byte range to hand to the certificate parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub source: CandidateSource,
    pub der: Cow<'a, [u8]>,
}

impl<'a> Candidate<'a> {
    fn der_fallback(raw: &'a [u8]) -> Self {
        Self {
            source: CandidateSource::Der,
            der: Cow::Borrowed(raw),
        }
    }
}

/// Split a blob into certificate candidates
///
/// PEM blocks are decoded in order of appearance. Blocks whose label is not
/// `CERTIFICATE` (or `... CERTIFICATE`, e.g. `TRUSTED CERTIFICATE`) are
/// skipped. Scanning stops at the first malformed block. If no certificate
/// block was found, the whole input is returned as a single DER candidate,
/// so the result is never empty.
pub fn frame(raw: &[u8]) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while let Some((start, end)) = next_armored_block(raw, pos) {
        let block = match ::pem::parse(&raw[start..end]) {
            Ok(block) => block,
            Err(e) => {
                debug!(offset = start, error = %e, "Malformed PEM block, stopping scan");
                break;
            }
        };
        pos = end;

        if !is_certificate_label(block.tag()) {
            debug!(label = block.tag(), "Skipping non-certificate PEM block");
            continue;
        }

        candidates.push(Candidate {
            source: CandidateSource::Pem {
                label: block.tag().to_string(),
            },
            der: Cow::Owned(block.into_contents()),
        });
    }

    if candidates.is_empty() {
        debug!(len = raw.len(), "No certificate PEM blocks, treating input as DER");
        candidates.push(Candidate::der_fallback(raw));
    }

    candidates
}

fn is_certificate_label(label: &str) -> bool {
    label == CERTIFICATE_LABEL || label.ends_with(CERTIFICATE_LABEL)
}

/// Locate the next `-----BEGIN ...` through `-----END ...-----` span at or after `from`
fn next_armored_block(raw: &[u8], from: usize) -> Option<(usize, usize)> {
    let start = find(raw, BEGIN_MARKER, from)?;
    let end_marker = find(raw, END_MARKER, start + BEGIN_MARKER.len())?;
    let closing = find(raw, DASHES, end_marker + END_MARKER.len())?;
    Some((start, closing + DASHES.len()))
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Read the raw blob from a file, or from stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<Vec<u8>, InputError> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut data)
            .map_err(|e| InputError::FileReadError {
                path: "<stdin>".to_string(),
                message: e.to_string(),
            })?;
        return Ok(data);
    }

    std::fs::read(path).map_err(|e| InputError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armor(label: &str, payload: &[u8]) -> String {
        ::pem::encode(&::pem::Pem::new(label, payload.to_vec()))
    }

    #[test]
    fn test_binary_without_markers_is_der_fallback() {
        let raw = [0x30, 0x82, 0x01, 0x0a, 0xff];
        let candidates = frame(&raw);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].source, CandidateSource::Der);
        assert_eq!(candidates[0].der.as_ref(), &raw);
    }

    #[test]
    fn test_empty_input_is_single_candidate() {
        let candidates = frame(b"");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].der.is_empty());
    }

    #[test]
    fn test_trusted_certificate_label_is_kept() {
        let raw = armor("TRUSTED CERTIFICATE", &[1, 2, 3]);
        let candidates = frame(raw.as_bytes());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].source,
            CandidateSource::Pem {
                label: "TRUSTED CERTIFICATE".to_string()
            }
        );
        assert_eq!(candidates[0].der.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn test_only_private_key_falls_back_to_der() {
        let raw = armor("PRIVATE KEY", &[9, 9, 9]);
        let candidates = frame(raw.as_bytes());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].source, CandidateSource::Der);
        assert_eq!(candidates[0].der.as_ref(), raw.as_bytes());
    }

    #[test]
    fn test_malformed_block_halts_scan() {
        let mut raw = armor("CERTIFICATE", &[1]);
        raw.push_str("-----BEGIN CERTIFICATE-----\n!!!not base64!!!\n-----END CERTIFICATE-----\n");
        raw.push_str(&armor("CERTIFICATE", &[3]));

        let candidates = frame(raw.as_bytes());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].der.as_ref(), &[1]);
    }

    #[test]
    fn test_unterminated_block_falls_back_to_der() {
        let raw = b"-----BEGIN CERTIFICATE-----\nAQID\n";
        let candidates = frame(raw);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].source, CandidateSource::Der);
    }

    #[test]
    fn test_find() {
        assert_eq!(find(b"abcabc", b"bc", 0), Some(1));
        assert_eq!(find(b"abcabc", b"bc", 2), Some(4));
        assert_eq!(find(b"abc", b"bc", 10), None);
    }
}

//! Report types
//!
//! A [`ReportSet`] is the numbered output for a whole input blob. Its
//! `Display` impl is the canonical text rendering; `Serialize` gives the same
//! data as JSON.

use serde::Serialize;
use std::fmt;

/// Width of the label gutter, including the colon
pub const LABEL_WIDTH: usize = 21;

/// Where a parsing candidate came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum CandidateSource {
    /// Payload of a PEM block with the given label
    Pem { label: String },
    /// The whole input, treated as a bare DER certificate
    Der,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::Pem { label } => write!(f, "PEM ({})", label),
            CandidateSource::Der => write!(f, "DER"),
        }
    }
}

/// One labeled line of a certificate report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    /// Heading this field is nested under, e.g. `Validity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    pub label: &'static str,
    pub value: String,
}

/// Ordered fields describing one certificate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    pub fields: Vec<ReportField>,
}

impl Report {
    /// Look up the value of a top-level or grouped field by label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// Layout rows in output order, group headings included
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        let mut rows = Vec::with_capacity(self.fields.len() + 1);
        let mut current_group: Option<&str> = None;

        for field in &self.fields {
            if field.group != current_group {
                if let Some(group) = field.group {
                    rows.push(ReportRow::Heading(group));
                }
                current_group = field.group;
            }

            let label = match field.group {
                Some(_) => format!("  {}:", field.label),
                None => format!("{}:", field.label),
            };
            rows.push(ReportRow::Field {
                label: format!("{:<width$}", label, width = LABEL_WIDTH),
                value: &field.value,
            });
        }

        rows
    }

    /// Rendered lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.rows().iter().map(ToString::to_string).collect()
    }
}

/// One output line of a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow<'a> {
    Heading(&'a str),
    /// `label` is already padded to [`LABEL_WIDTH`]
    Field { label: String, value: &'a str },
}

impl fmt::Display for ReportRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportRow::Heading(group) => write!(f, "{}:", group),
            ReportRow::Field { label, value } => write!(f, "{}{}", label, value),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Result for one candidate of a blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportEntry {
    Certificate {
        index: usize,
        source: CandidateSource,
        report: Report,
    },
    Failure {
        index: usize,
        source: CandidateSource,
        message: String,
    },
}

impl ReportEntry {
    /// 1-based position of the candidate in the input
    pub fn index(&self) -> usize {
        match self {
            ReportEntry::Certificate { index, .. } | ReportEntry::Failure { index, .. } => *index,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ReportEntry::Failure { .. })
    }

    /// Header line preceding a successful report
    pub fn header(index: usize) -> String {
        format!("===== Certificate #{} =====", index)
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Certificate { index, report, .. } => {
                write!(f, "{}\n{}", Self::header(*index), report)
            }
            ReportEntry::Failure { index, message, .. } => {
                write!(f, "#{}: not a certificate: {}", index, message)
            }
        }
    }
}

/// Numbered entries for every candidate of an input blob
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReportSet {
    pub entries: Vec<ReportEntry>,
}

impl ReportSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of candidates that parsed as certificates
    pub fn certificate_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_failure()).count()
    }
}

impl fmt::Display for ReportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(group: Option<&'static str>, label: &'static str, value: &str) -> ReportField {
        ReportField {
            group,
            label,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_lines_are_aligned() {
        let report = Report {
            fields: vec![
                field(None, "Subject", "CN=a"),
                field(None, "Signature Algorithm", "SHA256-RSA"),
            ],
        };
        assert_eq!(
            report.lines(),
            vec![
                "Subject:             CN=a".to_string(),
                "Signature Algorithm: SHA256-RSA".to_string(),
            ]
        );
    }

    #[test]
    fn test_group_heading_emitted_once() {
        let report = Report {
            fields: vec![
                field(None, "Public Key", "Ed25519"),
                field(Some("Validity"), "Not Before", "2024-01-01T00:00:00Z"),
                field(Some("Validity"), "Not After", "2025-01-01T00:00:00Z"),
                field(None, "Is CA", "false"),
            ],
        };
        assert_eq!(
            report.to_string(),
            "Public Key:          Ed25519\n\
             Validity:\n  \
             Not Before:        2024-01-01T00:00:00Z\n  \
             Not After:         2025-01-01T00:00:00Z\n\
             Is CA:               false"
        );
    }

    #[test]
    fn test_report_set_joined_by_blank_line() {
        let set = ReportSet {
            entries: vec![
                ReportEntry::Certificate {
                    index: 1,
                    source: CandidateSource::Der,
                    report: Report {
                        fields: vec![field(None, "Is CA", "true")],
                    },
                },
                ReportEntry::Failure {
                    index: 2,
                    source: CandidateSource::Der,
                    message: "boom".to_string(),
                },
            ],
        };
        assert_eq!(
            set.to_string(),
            "===== Certificate #1 =====\nIs CA:               true\n\n#2: not a certificate: boom"
        );
        assert_eq!(set.certificate_count(), 1);
    }
}

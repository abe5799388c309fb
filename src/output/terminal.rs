//! Terminal output
//!
//! Applies `console` styling on top of the canonical text layout. With
//! colors disabled the output is exactly `ReportSet`'s `Display`.

use crate::models::{ReportEntry, ReportRow, ReportSet};
use crate::utils::Result;
use console::style;
use std::io::Write;

/// Render a report set with terminal styling
pub fn styled_report_set(set: &ReportSet) -> String {
    set.entries
        .iter()
        .map(styled_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn styled_entry(entry: &ReportEntry) -> String {
    match entry {
        ReportEntry::Certificate { index, report, .. } => {
            let mut lines = vec![style(ReportEntry::header(*index)).cyan().bold().to_string()];
            lines.extend(report.rows().iter().map(|row| match row {
                ReportRow::Heading(_) => style(row).bold().to_string(),
                ReportRow::Field { label, value } => format!("{}{}", style(label).dim(), value),
            }));
            lines.join("\n")
        }
        ReportEntry::Failure { .. } => style(entry).red().to_string(),
    }
}

/// Print a report set to stdout
pub fn print_report_set(set: &ReportSet) -> Result<()> {
    writeln!(std::io::stdout().lock(), "{}", styled_report_set(set))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateSource, Report, ReportField};

    #[test]
    fn test_plain_output_matches_display() {
        console::set_colors_enabled(false);
        let set = ReportSet {
            entries: vec![
                ReportEntry::Certificate {
                    index: 1,
                    source: CandidateSource::Der,
                    report: Report {
                        fields: vec![
                            ReportField {
                                group: None,
                                label: "Subject",
                                value: "CN=a".to_string(),
                            },
                            ReportField {
                                group: Some("Validity"),
                                label: "Not After",
                                value: "2025-01-01T00:00:00Z".to_string(),
                            },
                        ],
                    },
                },
                ReportEntry::Failure {
                    index: 2,
                    source: CandidateSource::Der,
                    message: "boom".to_string(),
                },
            ],
        };

        assert_eq!(styled_report_set(&set), set.to_string());
    }
}

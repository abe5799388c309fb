//! JSON output formatter

use crate::models::ReportSet;
use crate::utils::Result;
use std::io::Write;

/// Serialize a report set as pretty-printed JSON
pub fn to_json_string(set: &ReportSet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(set)
}

/// Print a report set as JSON to stdout
pub fn print_json(set: &ReportSet) -> Result<()> {
    let json = to_json_string(set)?;
    writeln!(std::io::stdout().lock(), "{}", json)?;
    Ok(())
}

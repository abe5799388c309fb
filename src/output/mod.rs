//! Output formatting module
//!
//! Provides the two output formats:
//! - Styled terminal text, byte-identical to the canonical rendering when
//!   colors are off
//! - JSON export

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json_string};
pub use terminal::{print_report_set, styled_report_set};

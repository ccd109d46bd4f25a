//! Built-in filter editors
//!
//! Each editor renders plain inputs and reports every edit as a complete new
//! filter value. Where the edit ends up (staged or committed) is up to the host.

pub mod date_range;
pub mod enum_select;
pub mod number_range;
pub mod text;

pub use date_range::DateRangeFilterEditor;
pub use enum_select::EnumFilterEditor;
pub use number_range::NumberRangeFilterEditor;
pub use text::TextFilterEditor;

use chrono::NaiveDate;

/// Numeric bound typed by the user; blank means unbounded
pub fn parse_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', ".").parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn format_bound(bound: Option<f64>) -> String {
    bound.map(|n| n.to_string()).unwrap_or_default()
}

/// New input text when `text` no longer reads as `bound`; partial input such as
/// "1." or "-" is kept while it still parses to the same bound
pub fn reconcile_bound_text(text: &str, bound: Option<f64>) -> Option<String> {
    if parse_bound(text) == bound {
        None
    } else {
        Some(format_bound(bound))
    }
}

/// Value of an `<input type="date">`
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

use chrono::NaiveDate;
use serde_json::Value;

use super::value::{DateRangeFilter, EnumFilter, NumberRangeFilter, TextFilter};

/// Committed filter value applied to the cells of one column
pub trait RowFilter {
    /// Whether a cell passes the filter. An empty filter passes everything.
    fn matches(&self, cell: &Value) -> bool;

    /// Short text for an active filter chip
    fn describe(&self, header: &str) -> String;
}

/// Cell rendered as plain text; `None` for null/objects/arrays
pub fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric cell value; numeric strings are accepted
pub fn cell_number(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Date cell value; datetime strings are truncated to their date part
pub fn cell_date(cell: &Value) -> Option<NaiveDate> {
    let text = cell.as_str()?;
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

impl RowFilter for TextFilter {
    fn matches(&self, cell: &Value) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(text) = cell_text(cell) else {
            return false;
        };
        if self.case_sensitive {
            text.contains(self.query.trim())
        } else {
            text.to_lowercase()
                .contains(&self.query.trim().to_lowercase())
        }
    }

    fn describe(&self, header: &str) -> String {
        format!("{} содержит \"{}\"", header, self.query.trim())
    }
}

impl RowFilter for NumberRangeFilter {
    fn matches(&self, cell: &Value) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(number) = cell_number(cell) else {
            return false;
        };
        self.min.map_or(true, |min| number >= min) && self.max.map_or(true, |max| number <= max)
    }

    fn describe(&self, header: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                format!("{}: {} — {}", header, format_bound(min), format_bound(max))
            }
            (Some(min), None) => format!("{} ≥ {}", header, format_bound(min)),
            (None, Some(max)) => format!("{} ≤ {}", header, format_bound(max)),
            (None, None) => format!("{}: любой диапазон", header),
        }
    }
}

impl RowFilter for EnumFilter {
    fn matches(&self, cell: &Value) -> bool {
        if self.is_empty() {
            return true;
        }
        cell_text(cell).is_some_and(|text| self.is_selected(&text))
    }

    fn describe(&self, header: &str) -> String {
        if self.selected.len() <= 3 {
            format!("{} в [{}]", header, self.selected.join(", "))
        } else {
            format!("{} в списке ({} значений)", header, self.selected.len())
        }
    }
}

impl RowFilter for DateRangeFilter {
    fn matches(&self, cell: &Value) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(date) = cell_date(cell) else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    fn describe(&self, header: &str) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => format!("{}: {} — {}", header, from, to),
            (Some(from), None) => format!("{} ≥ {}", header, from),
            (None, Some(to)) => format!("{} ≤ {}", header, to),
            (None, None) => format!("{}: любой период", header),
        }
    }
}

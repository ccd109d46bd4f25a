use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Substring filter over text cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    pub query: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl TextFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            case_sensitive: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Inclusive numeric range; an absent bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberRangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberRangeFilter {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Set membership over a fixed list of options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumFilter {
    #[serde(default)]
    pub selected: Vec<String>,
}

impl EnumFilter {
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    /// Adds the option if missing, removes it otherwise. Keeps selection order.
    pub fn toggle(&mut self, option: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
        } else {
            self.selected.push(option.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Inclusive date range (YYYY-MM-DD)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeFilter {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

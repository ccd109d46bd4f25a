use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Column description as supplied by the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Unique column identifier (also the row field name)
    pub id: String,

    /// Header text
    pub header: String,

    /// Filter kind name. May name a kind that has no editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Options for enumerated filters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl ColumnConfig {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            filter: None,
            options: Vec::new(),
        }
    }

    pub fn with_filter(mut self, kind: impl Into<String>) -> Self {
        self.filter = Some(kind.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Grid-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: Vec<ColumnConfig>,

    /// localStorage key for committed filters; not persisted when absent
    #[serde(default)]
    pub storage_key: Option<String>,

    /// Accent color of active filter triggers
    #[serde(default)]
    pub accent_color: Option<String>,
}

#[derive(Debug, Error)]
pub enum GridConfigError {
    #[error("invalid grid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("column #{index} has an empty id")]
    EmptyColumnId { index: usize },

    #[error("duplicate column id `{0}`")]
    DuplicateColumn(String),
}

impl GridConfig {
    /// Parse and validate a JSON grid config
    pub fn from_json(json: &str) -> Result<Self, GridConfigError> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridConfigError> {
        let mut seen = HashSet::new();
        for (index, column) in self.columns.iter().enumerate() {
            if column.id.trim().is_empty() {
                return Err(GridConfigError::EmptyColumnId { index });
            }
            if !seen.insert(column.id.as_str()) {
                return Err(GridConfigError::DuplicateColumn(column.id.clone()));
            }
        }
        Ok(())
    }

    pub fn column(&self, id: &str) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.id == id)
    }
}

/// Committed filter values by column id, in persisted form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSnapshot {
    pub values: BTreeMap<String, Value>,
}

impl FilterSnapshot {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

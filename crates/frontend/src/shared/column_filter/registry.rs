//! Filter kind resolution
//!
//! Column configs name a filter kind; the registry turns that name into an
//! editor. Kinds without an editor stay as plain named filters.

use std::collections::HashMap;
use std::sync::Arc;

use contracts::shared::column_filter::ColumnConfig;
use serde_json::Value;

use super::editor::{AnyFilterEditor, ColumnFilterFn};
use super::editors::{
    DateRangeFilterEditor, EnumFilterEditor, NumberRangeFilterEditor, TextFilterEditor,
};
use super::table_state::TableFilterState;

type EditorFactory = Arc<dyn Fn(&ColumnConfig) -> AnyFilterEditor + Send + Sync>;

/// Resolved column of a grid
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub id: String,
    pub header: String,
    pub filter_fn: Option<ColumnFilterFn>,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            filter_fn: None,
        }
    }

    pub fn with_filter_fn(mut self, filter_fn: impl Into<ColumnFilterFn>) -> Self {
        self.filter_fn = Some(filter_fn.into());
        self
    }

    /// Editor of this column, if its filter has one
    pub fn editor(&self) -> Option<&AnyFilterEditor> {
        self.filter_fn.as_ref().and_then(ColumnFilterFn::as_editor)
    }

    /// Whether the row passes this column's committed filter
    pub fn matches_row(&self, row: &Value, state: &TableFilterState) -> bool {
        let Some(editor) = self.editor() else {
            return true;
        };
        let Some(filter) = state.filter_value(&self.id) else {
            return true;
        };
        editor.matches(&filter, row.get(&self.id).unwrap_or(&Value::Null))
    }
}

/// Filter kind name → editor factory
#[derive(Clone, Default)]
pub struct FilterRegistry {
    factories: HashMap<String, EditorFactory>,
}

impl FilterRegistry {
    /// Empty registry; every kind resolves to a named filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in editors
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("text", |_| AnyFilterEditor::new(TextFilterEditor));
        registry.register("number_range", |_| AnyFilterEditor::new(NumberRangeFilterEditor));
        registry.register("date_range", |_| AnyFilterEditor::new(DateRangeFilterEditor));
        registry.register("enum", |config| {
            AnyFilterEditor::new(EnumFilterEditor::new(config.options.iter().cloned()))
        });
        registry
    }

    /// Adds or replaces a kind
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&ColumnConfig) -> AnyFilterEditor + Send + Sync + 'static,
    {
        self.factories.insert(kind.into(), Arc::new(factory));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub fn resolve(&self, config: &ColumnConfig) -> ColumnDef {
        let filter_fn = config.filter.as_ref().map(|kind| match self.factories.get(kind) {
            Some(factory) => ColumnFilterFn::Editor(factory(config)),
            None => {
                log::warn!(
                    "Column `{}`: filter kind `{}` has no editor",
                    config.id,
                    kind
                );
                ColumnFilterFn::Named(kind.clone())
            }
        });

        ColumnDef {
            id: config.id.clone(),
            header: config.header.clone(),
            filter_fn,
        }
    }

    pub fn resolve_all(&self, configs: &[ColumnConfig]) -> Vec<ColumnDef> {
        configs.iter().map(|c| self.resolve(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::column_filter::{is_filter_editor, FilterEditor};
    use serde_json::json;

    #[test]
    fn test_resolve_builtin_kinds() {
        let registry = FilterRegistry::with_defaults();
        let column = registry.resolve(&ColumnConfig::new("age", "Возраст").with_filter("number_range"));

        assert_eq!(column.id, "age");
        assert!(column.filter_fn.as_ref().is_some_and(is_filter_editor));
        assert_eq!(column.editor().unwrap().init(), json!({ "min": null, "max": null }));
    }

    #[test]
    fn test_unknown_kind_becomes_named() {
        let registry = FilterRegistry::with_defaults();
        let column = registry.resolve(&ColumnConfig::new("name", "Имя").with_filter("includesString"));

        match &column.filter_fn {
            Some(ColumnFilterFn::Named(name)) => assert_eq!(name, "includesString"),
            other => panic!("unexpected filter fn: {:?}", other),
        }
        assert!(column.editor().is_none());
    }

    #[test]
    fn test_no_kind_no_filter() {
        let column = FilterRegistry::with_defaults().resolve(&ColumnConfig::new("note", "Комментарий"));
        assert!(column.filter_fn.is_none());
    }

    #[test]
    fn test_enum_factory_receives_options() {
        let registry = FilterRegistry::with_defaults();
        let config = ColumnConfig::new("status", "Статус")
            .with_filter("enum")
            .with_options(["active", "blocked"]);
        let column = registry.resolve(&config);
        let editor = column.editor().unwrap();

        assert!(editor.matches(&json!({ "selected": ["active"] }), &json!("active")));
        assert!(!editor.matches(&json!({ "selected": ["active"] }), &json!("blocked")));
    }

    #[test]
    fn test_register_custom_kind() {
        let mut registry = FilterRegistry::new();
        assert!(!registry.contains("text"));

        registry.register("search", |_| AnyFilterEditor::new(TextFilterEditor));
        let column = registry.resolve(&ColumnConfig::new("name", "Имя").with_filter("search"));
        assert!(column.editor().is_some());
    }

    #[test]
    fn test_matches_row() {
        let state = TableFilterState::new();
        let age = FilterRegistry::with_defaults()
            .resolve(&ColumnConfig::new("age", "Возраст").with_filter("number_range"));
        let row = json!({ "age": 16 });

        assert!(age.matches_row(&row, &state));
        state.set_filter_value("age", Some(json!({ "min": 18.0, "max": null })));
        assert!(!age.matches_row(&row, &state));
        assert!(age.matches_row(&json!({ "age": 30 }), &state));
        assert!(!age.matches_row(&json!({}), &state));
    }
}

//! Filter editor capability
//!
//! A filter type is pluggable into [`ColumnFilter`](super::ColumnFilter) and
//! [`ExternalColumnFilter`](super::ExternalColumnFilter) when it can produce an
//! empty value and render an editor bound to a value and a change callback.
//! Columns configured from untrusted JSON go through [`ColumnFilterFn`] and
//! [`is_filter_editor`] before either control touches them.

use std::fmt;
use std::sync::Arc;

use contracts::shared::column_filter::RowFilter;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Capability contract of a pluggable filter type
pub trait FilterEditor: Send + Sync + 'static {
    /// Filter value edited and committed by this editor
    type Value: Clone + Send + Sync + 'static;

    /// Empty filter value
    fn init(&self) -> Self::Value;

    /// Editor bound to `filter`; every edit is reported through `on_filter_change`
    fn element(
        &self,
        filter: Signal<Self::Value>,
        on_filter_change: Callback<Self::Value>,
    ) -> AnyView;
}

trait ErasedFilterEditor: Send + Sync {
    fn init_value(&self) -> Value;
    fn element_value(&self, filter: Signal<Value>, on_filter_change: Callback<Value>) -> AnyView;
    fn matches(&self, filter: &Value, cell: &Value) -> bool;
    fn describe(&self, filter: &Value, header: &str) -> String;
}

struct Erased<E>(E);

impl<E> Erased<E>
where
    E: FilterEditor,
    E::Value: Serialize + DeserializeOwned,
{
    fn decode(value: &Value) -> Option<E::Value> {
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(err) => {
                log::warn!("Filter value {} does not fit the editor: {}", value, err);
                None
            }
        }
    }

    fn encode(value: &E::Value) -> Value {
        serde_json::to_value(value).unwrap_or_else(|err| {
            log::error!("Failed to encode filter value: {}", err);
            Value::Null
        })
    }
}

impl<E> ErasedFilterEditor for Erased<E>
where
    E: FilterEditor,
    E::Value: Serialize + DeserializeOwned + RowFilter,
{
    fn init_value(&self) -> Value {
        Self::encode(&self.0.init())
    }

    fn element_value(&self, filter: Signal<Value>, on_filter_change: Callback<Value>) -> AnyView {
        let fallback = self.0.init();
        let typed = Signal::derive(move || {
            filter.with(Self::decode).unwrap_or_else(|| fallback.clone())
        });
        let on_change = Callback::new(move |value: E::Value| {
            on_filter_change.run(Self::encode(&value));
        });
        self.0.element(typed, on_change)
    }

    fn matches(&self, filter: &Value, cell: &Value) -> bool {
        // an undecodable committed value filters nothing out
        Self::decode(filter).map_or(true, |f| f.matches(cell))
    }

    fn describe(&self, filter: &Value, header: &str) -> String {
        Self::decode(filter)
            .map(|f| f.describe(header))
            .unwrap_or_else(|| header.to_string())
    }
}

/// Type-erased editor working on JSON filter values
///
/// Cheap to clone; this is what columns carry and what the table store keeps
/// values for.
#[derive(Clone)]
pub struct AnyFilterEditor(Arc<dyn ErasedFilterEditor>);

impl AnyFilterEditor {
    pub fn new<E>(editor: E) -> Self
    where
        E: FilterEditor,
        E::Value: Serialize + DeserializeOwned + RowFilter,
    {
        Self(Arc::new(Erased(editor)))
    }

    /// Row matching against a committed value
    pub fn matches(&self, filter: &Value, cell: &Value) -> bool {
        self.0.matches(filter, cell)
    }

    /// Chip text of a committed value
    pub fn describe(&self, filter: &Value, header: &str) -> String {
        self.0.describe(filter, header)
    }
}

impl FilterEditor for AnyFilterEditor {
    type Value = Value;

    fn init(&self) -> Value {
        self.0.init_value()
    }

    fn element(&self, filter: Signal<Value>, on_filter_change: Callback<Value>) -> AnyView {
        self.0.element_value(filter, on_filter_change)
    }
}

impl fmt::Debug for AnyFilterEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyFilterEditor")
            .field("init", &self.init())
            .finish()
    }
}

/// Filter configuration of a column
#[derive(Debug, Clone)]
pub enum ColumnFilterFn {
    /// Pluggable editor
    Editor(AnyFilterEditor),
    /// Plain filter function name with no editor behind it
    Named(String),
}

impl ColumnFilterFn {
    pub fn as_editor(&self) -> Option<&AnyFilterEditor> {
        match self {
            ColumnFilterFn::Editor(editor) => Some(editor),
            ColumnFilterFn::Named(_) => None,
        }
    }
}

impl From<AnyFilterEditor> for ColumnFilterFn {
    fn from(editor: AnyFilterEditor) -> Self {
        ColumnFilterFn::Editor(editor)
    }
}

/// Whether a column's filter configuration can drive a filter control
pub fn is_filter_editor(candidate: &ColumnFilterFn) -> bool {
    candidate.as_editor().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::column_filter::editors::{NumberRangeFilterEditor, TextFilterEditor};
    use serde_json::json;

    #[test]
    fn test_narrowing() {
        let editor = ColumnFilterFn::from(AnyFilterEditor::new(TextFilterEditor));
        let named = ColumnFilterFn::Named("includesString".into());

        assert!(is_filter_editor(&editor));
        assert!(!is_filter_editor(&named));
        assert!(named.as_editor().is_none());
    }

    #[test]
    fn test_erased_init_is_json_of_typed_init() {
        let editor = AnyFilterEditor::new(NumberRangeFilterEditor);
        assert_eq!(editor.init(), json!({ "min": null, "max": null }));
    }

    #[test]
    fn test_erased_matches() {
        let editor = AnyFilterEditor::new(NumberRangeFilterEditor);
        let filter = json!({ "min": 18.0, "max": null });

        assert!(editor.matches(&filter, &json!(30)));
        assert!(!editor.matches(&filter, &json!(12)));
        assert_eq!(editor.describe(&filter, "Возраст"), "Возраст ≥ 18");
    }

    #[test]
    fn test_foreign_value_filters_nothing() {
        let editor = AnyFilterEditor::new(NumberRangeFilterEditor);
        let foreign = json!("not a range");

        assert!(editor.matches(&foreign, &json!(1)));
        assert_eq!(editor.describe(&foreign, "Возраст"), "Возраст");
    }
}

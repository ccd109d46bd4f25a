//! External filter mode
//!
//! The editor is always visible and every edit is committed right away; there
//! is no staged value and no save gesture. Columns whose filter has no editor
//! render nothing.

use leptos::prelude::*;
use serde_json::Value;

use super::editor::{AnyFilterEditor, ColumnFilterFn, FilterEditor};
use super::registry::ColumnDef;
use super::table_state::{use_table_filters, FilterColumn};

/// Local editor value of a column, written through to the table on every change
#[derive(Debug, Clone)]
pub struct ExternalFilter<E: FilterEditor, C> {
    editor: E,
    column: C,
    value: E::Value,
}

impl<E, C> ExternalFilter<E, C>
where
    E: FilterEditor,
    C: FilterColumn<Value = E::Value>,
{
    pub fn new(editor: E, column: C) -> Self {
        let value = column.filter_value().unwrap_or_else(|| editor.init());
        Self {
            editor,
            column,
            value,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn value(&self) -> &E::Value {
        &self.value
    }

    /// Commits `value` and keeps it as the local value
    pub fn change(&mut self, value: E::Value) {
        self.column.set_filter_value(Some(value.clone()));
        self.value = value;
    }

    /// Re-reads the committed value after it was changed elsewhere
    pub fn sync(&mut self, committed: Option<E::Value>) {
        self.value = committed.unwrap_or_else(|| self.editor.init());
    }
}

impl<E, C> ExternalFilter<E, C>
where
    E: FilterEditor,
    E::Value: PartialEq,
    C: FilterColumn<Value = E::Value>,
{
    /// Whether the local value already shows `committed` (or `init()` when absent)
    pub fn is_synced_with(&self, committed: Option<&E::Value>) -> bool {
        match committed {
            Some(committed) => committed == &self.value,
            None => self.editor.init() == self.value,
        }
    }

    /// Syncs when the local value differs; returns whether it changed
    pub fn sync_if_changed(&mut self, committed: Option<E::Value>) -> bool {
        if self.is_synced_with(committed.as_ref()) {
            return false;
        }
        self.sync(committed);
        true
    }
}

impl<C> ExternalFilter<AnyFilterEditor, C>
where
    C: FilterColumn<Value = Value>,
{
    /// `None` when the column's filter cannot drive an editor
    pub fn attach(filter_fn: Option<&ColumnFilterFn>, column: C) -> Option<Self> {
        let editor = filter_fn.and_then(ColumnFilterFn::as_editor)?;
        Some(Self::new(editor.clone(), column))
    }
}

#[component]
pub fn ExternalColumnFilter(column: ColumnDef) -> impl IntoView {
    let state = use_table_filters();
    let Some(filter) = ExternalFilter::attach(column.filter_fn.as_ref(), state.column(column.id.as_str())) else {
        log::debug!("Column `{}`: no filter editor, nothing to render", column.id);
        return ().into_any();
    };

    let editor = filter.editor().clone();
    let filter = RwSignal::new(filter);
    let column_id = column.id.clone();

    // committed value may be changed or cleared by other controls
    Effect::new(move |_| {
        let committed = state.filter_value(&column_id);
        if !filter.with_untracked(|f| f.is_synced_with(committed.as_ref())) {
            filter.update(|f| {
                f.sync_if_changed(committed);
            });
        }
    });

    let value = Signal::derive(move || filter.with(|f| f.value().clone()));
    let on_change = Callback::new(move |value: Value| {
        filter.update(|f| f.change(value));
    });

    editor.element(value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::column_filter::editors::{NumberRangeFilterEditor, TextFilterEditor};
    use crate::shared::column_filter::session::tests::{MockColumn, RangeEditor};
    use contracts::shared::column_filter::NumberRangeFilter;
    use serde_json::json;

    #[test]
    fn test_change_commits_immediately() {
        let column = MockColumn::default();
        let mut filter = ExternalFilter::new(RangeEditor, &column);
        let adult = NumberRangeFilter {
            min: Some(18.0),
            max: None,
        };
        filter.change(adult);

        assert_eq!(filter.value(), &adult);
        assert_eq!(column.filter_value(), Some(adult));
        assert_eq!(column.writes.get(), 1);
    }

    #[test]
    fn test_initial_value_from_table_or_init() {
        let committed = NumberRangeFilter::between(1.0, 2.0);
        let filtered = MockColumn::with_value(committed);
        assert_eq!(ExternalFilter::new(RangeEditor, &filtered).value(), &committed);

        let unfiltered = MockColumn::default();
        let filter = ExternalFilter::new(RangeEditor, &unfiltered);
        assert_eq!(filter.value(), &NumberRangeFilter::default());
        assert_eq!(unfiltered.writes.get(), 0);
    }

    #[test]
    fn test_attach_requires_editor() {
        let column = MockColumn::<Value>::default();
        let named = ColumnFilterFn::Named("equals".into());

        assert!(ExternalFilter::attach(Some(&named), &column).is_none());
        assert!(ExternalFilter::attach(None, &column).is_none());
    }

    #[test]
    fn test_attached_editor_writes_json() {
        let column = MockColumn::<Value>::default();
        let filter_fn = ColumnFilterFn::from(AnyFilterEditor::new(TextFilterEditor));
        let mut filter = ExternalFilter::attach(Some(&filter_fn), &column).unwrap();

        assert_eq!(filter.value(), &json!({ "query": "", "case_sensitive": false }));
        filter.change(json!({ "query": "ann", "case_sensitive": false }));
        assert_eq!(
            column.filter_value(),
            Some(json!({ "query": "ann", "case_sensitive": false }))
        );
    }

    #[test]
    fn test_sync_after_external_clear() {
        let column = MockColumn::<Value>::default();
        let filter_fn = ColumnFilterFn::from(AnyFilterEditor::new(NumberRangeFilterEditor));
        let mut filter = ExternalFilter::attach(Some(&filter_fn), &column).unwrap();
        filter.change(json!({ "min": 18.0, "max": null }));

        column.set_filter_value(None);
        assert!(filter.sync_if_changed(column.filter_value()));
        assert_eq!(filter.value(), &json!({ "min": null, "max": null }));
    }

    #[test]
    fn test_sync_skipped_when_value_matches() {
        let column = MockColumn::default();
        let mut filter = ExternalFilter::new(RangeEditor, &column);
        assert!(filter.is_synced_with(None));
        assert!(!filter.sync_if_changed(None));

        let adult = NumberRangeFilter {
            min: Some(18.0),
            max: None,
        };
        filter.change(adult);
        assert!(!filter.sync_if_changed(column.filter_value()));
        assert_eq!(column.writes.get(), 1);
    }

    #[test]
    fn test_sync_adopts_value_committed_elsewhere() {
        let column = MockColumn::default();
        let mut filter = ExternalFilter::new(RangeEditor, &column);
        let saved = NumberRangeFilter::between(18.0, 65.0);
        column.set_filter_value(Some(saved));

        assert!(!filter.is_synced_with(Some(&saved)));
        assert!(filter.sync_if_changed(column.filter_value()));
        assert_eq!(filter.value(), &saved);
    }
}

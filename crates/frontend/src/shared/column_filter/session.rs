//! Staged edit of one column filter
//!
//! While the editor is open the edited value lives here, apart from the
//! committed value of the table. Only [`FilterSession::save`] moves it across.

use super::editor::FilterEditor;
use super::table_state::FilterColumn;

/// Value being edited, not yet applied to the table
#[derive(Debug, Clone, PartialEq)]
pub struct StagedValue<V>(V);

impl<V> StagedValue<V> {
    pub fn get(&self) -> &V {
        &self.0
    }

    fn into_committed(self) -> V {
        self.0
    }
}

/// Open/closed state plus the staged value; open exactly when a value is staged
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSession<V> {
    staged: Option<StagedValue<V>>,
}

impl<V> Default for FilterSession<V> {
    fn default() -> Self {
        Self { staged: None }
    }
}

impl<V: Clone> FilterSession<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.staged.is_some()
    }

    pub fn staged(&self) -> Option<&V> {
        self.staged.as_ref().map(StagedValue::get)
    }

    /// Opens the editor, staging the committed value or the editor's empty value
    pub fn open<E, C>(&mut self, editor: &E, column: &C)
    where
        E: FilterEditor<Value = V> + ?Sized,
        C: FilterColumn<Value = V> + ?Sized,
    {
        if self.is_open() {
            return;
        }
        let committed = if column.is_filtered() {
            column.filter_value()
        } else {
            None
        };
        self.staged = Some(StagedValue(committed.unwrap_or_else(|| editor.init())));
    }

    /// Replaces the staged value; the table is not touched
    pub fn editor_changed(&mut self, value: V) {
        match self.staged.as_mut() {
            Some(staged) => staged.0 = value,
            None => log::debug!("Filter change ignored: editor is closed"),
        }
    }

    /// Commits the staged value to the table and closes
    pub fn save<C>(&mut self, column: &C)
    where
        C: FilterColumn<Value = V> + ?Sized,
    {
        match self.staged.take() {
            Some(staged) => column.set_filter_value(Some(staged.into_committed())),
            None => log::debug!("Filter save ignored: editor is closed"),
        }
    }

    /// Removes the committed filter regardless of what is staged, then closes
    pub fn clear<C>(&mut self, column: &C)
    where
        C: FilterColumn<Value = V> + ?Sized,
    {
        column.set_filter_value(None);
        self.close();
    }

    /// Discards the staged value; the table is not touched
    pub fn close(&mut self) {
        self.staged = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::shared::column_filter::NumberRangeFilter;
    use leptos::prelude::*;
    use std::cell::{Cell, RefCell};

    /// In-memory column counting writes
    #[derive(Default)]
    pub(crate) struct MockColumn<V> {
        pub value: RefCell<Option<V>>,
        pub writes: Cell<usize>,
    }

    impl<V> MockColumn<V> {
        pub fn with_value(value: V) -> Self {
            Self {
                value: RefCell::new(Some(value)),
                writes: Cell::new(0),
            }
        }
    }

    impl<V: Clone> FilterColumn for MockColumn<V> {
        type Value = V;

        fn filter_value(&self) -> Option<V> {
            self.value.borrow().clone()
        }

        fn set_filter_value(&self, value: Option<V>) {
            self.writes.set(self.writes.get() + 1);
            *self.value.borrow_mut() = value;
        }
    }

    pub(crate) struct RangeEditor;

    impl FilterEditor for RangeEditor {
        type Value = NumberRangeFilter;

        fn init(&self) -> NumberRangeFilter {
            NumberRangeFilter::default()
        }

        fn element(
            &self,
            _filter: Signal<NumberRangeFilter>,
            _on_filter_change: Callback<NumberRangeFilter>,
        ) -> AnyView {
            ().into_any()
        }
    }

    fn adult() -> NumberRangeFilter {
        NumberRangeFilter {
            min: Some(18.0),
            max: None,
        }
    }

    #[test]
    fn test_starts_closed() {
        let session = FilterSession::<NumberRangeFilter>::new();
        assert!(!session.is_open());
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_open_unfiltered_stages_init() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);

        assert!(session.is_open());
        assert_eq!(session.staged(), Some(&NumberRangeFilter::default()));
        assert_eq!(column.writes.get(), 0);
    }

    #[test]
    fn test_open_filtered_stages_committed_value() {
        let column = MockColumn::with_value(adult());
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);

        assert_eq!(session.staged(), Some(&adult()));
    }

    #[test]
    fn test_open_twice_keeps_staged_edit() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        session.editor_changed(adult());
        session.open(&RangeEditor, &column);

        assert_eq!(session.staged(), Some(&adult()));
    }

    #[test]
    fn test_edits_are_staged_only() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        for max in [10.0, 20.0, 30.0] {
            session.editor_changed(NumberRangeFilter {
                min: None,
                max: Some(max),
            });
        }

        assert_eq!(column.writes.get(), 0);
        assert!(column.filter_value().is_none());
    }

    #[test]
    fn test_save_commits_once_and_closes() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        session.editor_changed(adult());
        session.save(&column);

        assert_eq!(column.filter_value(), Some(adult()));
        assert_eq!(column.writes.get(), 1);
        assert!(!session.is_open());
    }

    #[test]
    fn test_close_discards_edit() {
        let column = MockColumn::with_value(adult());
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        session.editor_changed(NumberRangeFilter::between(18.0, 65.0));
        session.close();

        assert_eq!(column.filter_value(), Some(adult()));
        assert_eq!(column.writes.get(), 0);
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_clear_ignores_staged_content() {
        let column = MockColumn::with_value(adult());
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        session.editor_changed(NumberRangeFilter::between(1.0, 2.0));
        session.clear(&column);

        assert!(column.filter_value().is_none());
        assert!(!column.is_filtered());
        assert!(!session.is_open());
    }

    #[test]
    fn test_clear_while_closed() {
        let column = MockColumn::with_value(adult());
        let mut session = FilterSession::<NumberRangeFilter>::new();
        session.clear(&column);

        assert!(!column.is_filtered());
    }

    #[test]
    fn test_save_and_change_while_closed_are_ignored() {
        let column = MockColumn::with_value(adult());
        let mut session = FilterSession::new();
        session.editor_changed(NumberRangeFilter::between(1.0, 2.0));
        session.save(&column);

        assert_eq!(column.writes.get(), 0);
        assert_eq!(column.filter_value(), Some(adult()));
    }

    #[test]
    fn test_reopen_reinitializes_from_table() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();
        session.open(&RangeEditor, &column);
        session.editor_changed(adult());
        session.close();

        session.open(&RangeEditor, &column);
        assert_eq!(session.staged(), Some(&NumberRangeFilter::default()));
    }

    #[test]
    fn test_age_scenario() {
        let column = MockColumn::default();
        let mut session = FilterSession::new();

        session.open(&RangeEditor, &column);
        assert_eq!(session.staged(), Some(&NumberRangeFilter::default()));

        session.editor_changed(adult());
        assert!(column.filter_value().is_none());

        session.save(&column);
        assert_eq!(column.filter_value(), Some(adult()));
        assert!(column.is_filtered());

        session.open(&RangeEditor, &column);
        assert_eq!(session.staged(), Some(&adult()));
        session.editor_changed(NumberRangeFilter::between(18.0, 65.0));
        session.close();
        assert_eq!(column.filter_value(), Some(adult()));
    }
}

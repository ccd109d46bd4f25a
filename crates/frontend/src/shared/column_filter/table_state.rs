//! Committed filter values of a table
//!
//! The table owns what is actually applied to rows. Controls read and write it
//! only through [`FilterColumn`]; values outlive any control that edited them.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use contracts::shared::column_filter::FilterSnapshot;
use leptos::prelude::*;
use serde_json::Value;

/// Per-column accessor of committed filter state
pub trait FilterColumn {
    type Value;

    fn filter_value(&self) -> Option<Self::Value>;

    /// `None` removes the filter
    fn set_filter_value(&self, value: Option<Self::Value>);

    fn is_filtered(&self) -> bool {
        self.filter_value().is_some()
    }
}

impl<T: FilterColumn + ?Sized> FilterColumn for &T {
    type Value = T::Value;

    fn filter_value(&self) -> Option<Self::Value> {
        (**self).filter_value()
    }

    fn set_filter_value(&self, value: Option<Self::Value>) {
        (**self).set_filter_value(value)
    }

    fn is_filtered(&self) -> bool {
        (**self).is_filtered()
    }
}

/// Reactive store of committed filter values keyed by column id
#[derive(Clone, Copy, Debug)]
pub struct TableFilterState {
    values: RwSignal<HashMap<String, Value>>,
}

impl TableFilterState {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(HashMap::new()),
        }
    }

    pub fn from_snapshot(snapshot: FilterSnapshot) -> Self {
        Self {
            values: RwSignal::new(snapshot.values.into_iter().collect()),
        }
    }

    pub fn column(&self, id: impl Into<Arc<str>>) -> TableColumn {
        TableColumn {
            state: *self,
            id: id.into(),
        }
    }

    pub fn filter_value(&self, column_id: &str) -> Option<Value> {
        self.values.with(|values| values.get(column_id).cloned())
    }

    pub fn set_filter_value(&self, column_id: &str, value: Option<Value>) {
        self.values.update(|values| match value {
            Some(value) => {
                values.insert(column_id.to_string(), value);
            }
            None => {
                values.remove(column_id);
            }
        });
    }

    pub fn is_filtered(&self, column_id: &str) -> bool {
        self.values.with(|values| values.contains_key(column_id))
    }

    /// Number of filtered columns
    pub fn active_count(&self) -> usize {
        self.values.with(|values| values.len())
    }

    /// Ids of filtered columns, sorted
    pub fn active_columns(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.values.with(|values| values.keys().cloned().collect());
        ids.sort();
        ids
    }

    pub fn clear_all(&self) {
        self.values.update(|values| values.clear());
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            values: self
                .values
                .with(|values| values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        }
    }
}

impl Default for TableFilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Committed filter state of one column
#[derive(Clone, Debug)]
pub struct TableColumn {
    state: TableFilterState,
    id: Arc<str>,
}

impl TableColumn {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FilterColumn for TableColumn {
    type Value = Value;

    fn filter_value(&self) -> Option<Value> {
        self.state.filter_value(&self.id)
    }

    fn set_filter_value(&self, value: Option<Value>) {
        self.state.set_filter_value(&self.id, value);
    }

    fn is_filtered(&self) -> bool {
        self.state.is_filtered(&self.id)
    }
}

/// Provides a table filter store to children
pub fn provide_table_filters(state: TableFilterState) {
    provide_context(state);
}

/// Table filter store of the enclosing grid
pub fn use_table_filters() -> TableFilterState {
    use_context::<TableFilterState>()
        .expect("TableFilterState not found. Wrap the grid with provide_table_filters.")
}

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
        .context("no window")?
        .local_storage()
        .map_err(|err| anyhow::anyhow!("{:?}", err))?
        .context("localStorage is unavailable")
}

/// Reads persisted filters; `Ok(None)` when nothing was saved
pub fn load_filters(storage_key: &str) -> anyhow::Result<Option<FilterSnapshot>> {
    let storage = local_storage()?;
    let Some(json) = storage
        .get_item(storage_key)
        .map_err(|err| anyhow::anyhow!("{:?}", err))?
    else {
        return Ok(None);
    };
    let snapshot = serde_json::from_str(&json)
        .with_context(|| format!("corrupt filter snapshot under `{}`", storage_key))?;
    Ok(Some(snapshot))
}

/// Persists committed filters; an empty snapshot removes the key
pub fn save_filters(storage_key: &str, snapshot: &FilterSnapshot) -> anyhow::Result<()> {
    let storage = local_storage()?;
    if snapshot.is_empty() {
        storage
            .remove_item(storage_key)
            .map_err(|err| anyhow::anyhow!("{:?}", err))?;
        return Ok(());
    }
    let json = serde_json::to_string(snapshot).context("encode filter snapshot")?;
    storage
        .set_item(storage_key, &json)
        .map_err(|err| anyhow::anyhow!("{:?}", err))?;
    Ok(())
}

//! Data grid with per-column filters
//!
//! Header cells carry a [`ColumnFilter`] for every column whose filter has an
//! editor; the same editors are also offered always-visible in a collapsible
//! [`FilterPanel`]. Rows are filtered by the committed values only.

use contracts::shared::column_filter::{cell_text, FilterSnapshot, GridConfig};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::column_filter::{
    load_filters, provide_table_filters, save_filters, ColumnDef, ColumnFilter,
    ExternalColumnFilter, FilterRegistry, TableFilterState,
};
use crate::shared::components::{FilterPanel, FilterTag};

/// Rows passing every committed column filter, in original order
pub fn filter_rows(rows: &[Value], columns: &[ColumnDef], state: &TableFilterState) -> Vec<Value> {
    rows.iter()
        .filter(|row| columns.iter().all(|column| column.matches_row(row, state)))
        .cloned()
        .collect()
}

/// Keeps persisted values only for columns that still have a filter editor
pub fn restorable_snapshot(mut snapshot: FilterSnapshot, columns: &[ColumnDef]) -> FilterSnapshot {
    snapshot.values.retain(|id, _| {
        columns
            .iter()
            .any(|column| &column.id == id && column.editor().is_some())
    });
    snapshot
}

fn restore_state(config: &GridConfig, columns: &[ColumnDef]) -> TableFilterState {
    let Some(key) = config.storage_key.as_deref() else {
        return TableFilterState::new();
    };
    match load_filters(key) {
        Ok(Some(snapshot)) => TableFilterState::from_snapshot(restorable_snapshot(snapshot, columns)),
        Ok(None) => TableFilterState::new(),
        Err(err) => {
            log::warn!("Failed to restore filters: {:#}", err);
            TableFilterState::new()
        }
    }
}

#[component]
pub fn DataGrid(
    /// Grid configuration
    config: GridConfig,
    /// Rows as JSON objects keyed by column id
    rows: Vec<Value>,
    /// Filter kinds; built-in editors when omitted
    #[prop(optional)]
    registry: Option<FilterRegistry>,
) -> impl IntoView {
    let registry = registry.unwrap_or_else(FilterRegistry::with_defaults);
    let resolved = registry.resolve_all(&config.columns);
    let state = restore_state(&config, &resolved);
    let columns = StoredValue::new(resolved);
    let rows = StoredValue::new(rows);
    let accent = config.accent_color.clone();

    provide_table_filters(state);

    if let Some(key) = config.storage_key.clone() {
        Effect::new(move |_| {
            if let Err(err) = save_filters(&key, &state.snapshot()) {
                log::warn!("Failed to persist filters: {:#}", err);
            }
        });
    }

    let visible_rows = Memo::new(move |_| {
        columns.with_value(|columns| rows.with_value(|rows| filter_rows(rows, columns, &state)))
    });

    let is_expanded = RwSignal::new(false);
    let active_filters_count = Signal::derive(move || state.active_count());
    let clear_all = Callback::new(move |_: ()| {
        log::debug!("All column filters cleared");
        state.clear_all();
    });

    let header_cells = columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                let header = column.header.clone();
                let column_state = state.column(column.id.clone());
                let filter = column.editor().cloned().map(|editor| {
                    view! {
                        <ColumnFilter
                            column=column_state
                            filter_fn=editor
                            class="data-grid__filter"
                            color=accent.clone()
                        />
                    }
                });
                view! {
                    <TableHeaderCell>
                        <div class="data-grid__header">
                            <span>{header}</span>
                            {filter}
                        </div>
                    </TableHeaderCell>
                }
            })
            .collect_view()
    });

    let filter_content = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .filter(|column| column.editor().is_some())
                .cloned()
                .map(|column| {
                    view! {
                        <div class="form-group">
                            <label>{column.header.clone()}</label>
                            <ExternalColumnFilter column=column />
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let filter_tags = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .filter(|column| column.editor().is_some())
                .cloned()
                .map(|column| {
                    let column_id = column.id.clone();
                    let is_active = {
                        let column_id = column_id.clone();
                        move || state.is_filtered(&column_id)
                    };
                    let label = Signal::derive(move || {
                        match (column.editor(), state.filter_value(&column.id)) {
                            (Some(editor), Some(filter)) => editor.describe(&filter, &column.header),
                            _ => column.header.clone(),
                        }
                    });
                    let on_remove = Callback::new(move |_: ()| {
                        state.set_filter_value(&column_id, None);
                    });
                    view! {
                        <Show when=is_active>
                            <FilterTag label=label on_remove=on_remove />
                        </Show>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="data-grid">
            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_filters_count
                on_clear_all=clear_all
                filter_content=filter_content
                filter_tags=filter_tags
            />
            <Table>
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        visible_rows
                            .get()
                            .into_iter()
                            .map(|row| {
                                let cells = columns.with_value(|columns| {
                                    columns
                                        .iter()
                                        .map(|column| {
                                            let text = row
                                                .get(&column.id)
                                                .and_then(cell_text)
                                                .unwrap_or_default();
                                            view! { <TableCell>{text}</TableCell> }
                                        })
                                        .collect_view()
                                });
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <div class="data-grid__footer">
                {move || format!("Показано: {} из {}", visible_rows.with(|r| r.len()), rows.with_value(|r| r.len()))}
            </div>
        </div>
    }
}

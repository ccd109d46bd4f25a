//! Column filter control
//!
//! Trigger button in a column header plus a dropdown hosting the column's
//! filter editor. Edits are staged in a [`FilterSession`] and reach the table
//! only on save; clear removes the committed filter; dismissing the dropdown
//! (backdrop click, Escape) discards the edit.

use leptos::ev;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use super::editor::{AnyFilterEditor, FilterEditor};
use super::session::FilterSession;
use super::table_state::{FilterColumn, TableColumn};
use crate::shared::icons::icon;

const TRIGGER_CLASS: &str = "button button--icon column-filter__trigger";

fn trigger_class(extra: &str, is_filtered: bool) -> String {
    let mut class = String::from(TRIGGER_CLASS);
    if is_filtered {
        class.push_str(" column-filter__trigger--active");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn trigger_style(color: Option<&str>, is_filtered: bool) -> String {
    match (color, is_filtered) {
        (Some(color), true) => format!("color: {};", color),
        _ => String::new(),
    }
}

#[component]
pub fn ColumnFilter(
    /// Column whose committed filter is edited
    column: TableColumn,
    /// Editor of the column's filter type
    filter_fn: AnyFilterEditor,
    /// Extra class of the trigger button
    #[prop(optional, into)]
    class: String,
    /// Trigger color while the column is filtered
    #[prop(optional, into)]
    color: MaybeProp<String>,
) -> impl IntoView {
    let session = RwSignal::new(FilterSession::<Value>::new());
    let editor = StoredValue::new(filter_fn);
    let column = StoredValue::new(column);

    let is_filtered = Signal::derive(move || column.with_value(|c| c.is_filtered()));
    let is_open = Signal::derive(move || session.with(|s| s.is_open()));
    let staged = Signal::derive(move || {
        session
            .with(|s| s.staged().cloned())
            .unwrap_or(Value::Null)
    });

    let open = Callback::new(move |_: ()| {
        editor.with_value(|e| column.with_value(|c| session.update(|s| s.open(e, c))));
    });

    let on_change = Callback::new(move |value: Value| {
        session.update(|s| s.editor_changed(value));
    });

    let save = Callback::new(move |_: ()| {
        column.with_value(|c| {
            log::debug!("Column `{}`: filter saved", c.id());
            session.update(|s| s.save(c));
        });
    });

    let clear = Callback::new(move |_: ()| {
        column.with_value(|c| {
            log::debug!("Column `{}`: filter cleared", c.id());
            session.update(|s| s.clear(c));
        });
    });

    let close = Callback::new(move |_: ()| {
        if session.with_untracked(|s| s.is_open()) {
            session.update(|s| s.close());
        }
    });

    view! {
        <div class="column-filter">
            <button
                class=move || trigger_class(&class, is_filtered.get())
                style=move || trigger_style(color.get().as_deref(), is_filtered.get())
                title="Фильтр"
                aria-label="Фильтр"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    open.run(());
                }
            >
                {icon("filter")}
            </button>

            <Show when=move || is_open.get()>
                <div class="column-filter__backdrop" on:click=move |_| close.run(())></div>
                <div
                    class="column-filter__dropdown"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            close.run(());
                        }
                    }
                >
                    {editor.with_value(|e| e.element(staged, on_change))}
                    <div class="column-filter__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| clear.run(())
                            attr:aria-label="Сбросить фильтр"
                        >
                            {icon("x")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            size=ButtonSize::Small
                            on_click=move |_| save.run(())
                            attr:aria-label="Применить фильтр"
                        >
                            {icon("check")}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

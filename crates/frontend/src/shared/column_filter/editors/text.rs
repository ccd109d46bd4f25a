use contracts::shared::column_filter::TextFilter;
use leptos::prelude::*;

use crate::shared::column_filter::FilterEditor;

/// Substring search editor
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFilterEditor;

impl FilterEditor for TextFilterEditor {
    type Value = TextFilter;

    fn init(&self) -> TextFilter {
        TextFilter::default()
    }

    fn element(&self, filter: Signal<TextFilter>, on_filter_change: Callback<TextFilter>) -> AnyView {
        view! { <TextFilterInput filter=filter on_filter_change=on_filter_change /> }.into_any()
    }
}

#[component]
fn TextFilterInput(filter: Signal<TextFilter>, on_filter_change: Callback<TextFilter>) -> impl IntoView {
    view! {
        <div class="column-filter-editor">
            <input
                type="text"
                class="column-filter-editor__input"
                placeholder="Текст для поиска"
                prop:value=move || filter.with(|f| f.query.clone())
                on:input=move |ev| {
                    let mut next = filter.get_untracked();
                    next.query = event_target_value(&ev);
                    on_filter_change.run(next);
                }
            />
            <label class="column-filter-editor__option">
                <input
                    type="checkbox"
                    prop:checked=move || filter.with(|f| f.case_sensitive)
                    on:change=move |ev| {
                        let mut next = filter.get_untracked();
                        next.case_sensitive = event_target_checked(&ev);
                        on_filter_change.run(next);
                    }
                />
                "Учитывать регистр"
            </label>
        </div>
    }
}

use contracts::shared::column_filter::NumberRangeFilter;
use leptos::prelude::*;

use super::{format_bound, parse_bound, reconcile_bound_text};
use crate::shared::column_filter::FilterEditor;

/// Inclusive min/max editor
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRangeFilterEditor;

impl FilterEditor for NumberRangeFilterEditor {
    type Value = NumberRangeFilter;

    fn init(&self) -> NumberRangeFilter {
        NumberRangeFilter::default()
    }

    fn element(
        &self,
        filter: Signal<NumberRangeFilter>,
        on_filter_change: Callback<NumberRangeFilter>,
    ) -> AnyView {
        view! { <NumberRangeInputs filter=filter on_filter_change=on_filter_change /> }.into_any()
    }
}

#[component]
fn NumberRangeInputs(
    filter: Signal<NumberRangeFilter>,
    on_filter_change: Callback<NumberRangeFilter>,
) -> impl IntoView {
    // Raw text is kept locally so "1." or "-" survive re-rendering
    let initial = filter.get_untracked();
    let min_text = RwSignal::new(format_bound(initial.min));
    let max_text = RwSignal::new(format_bound(initial.max));

    // bounds may be changed or cleared outside this editor
    Effect::new(move |_| {
        let current = filter.get();
        if let Some(text) = reconcile_bound_text(&min_text.get_untracked(), current.min) {
            min_text.set(text);
        }
        if let Some(text) = reconcile_bound_text(&max_text.get_untracked(), current.max) {
            max_text.set(text);
        }
    });

    let emit = move || {
        on_filter_change.run(NumberRangeFilter {
            min: parse_bound(&min_text.get_untracked()),
            max: parse_bound(&max_text.get_untracked()),
        });
    };

    view! {
        <div class="column-filter-editor column-filter-editor--range">
            <div class="form-group">
                <label>"От:"</label>
                <input
                    type="text"
                    inputmode="decimal"
                    class="column-filter-editor__input"
                    placeholder="Минимальное значение"
                    prop:value=move || min_text.get()
                    on:input=move |ev| {
                        min_text.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
            <div class="form-group">
                <label>"До:"</label>
                <input
                    type="text"
                    inputmode="decimal"
                    class="column-filter-editor__input"
                    placeholder="Максимальное значение"
                    prop:value=move || max_text.get()
                    on:input=move |ev| {
                        max_text.set(event_target_value(&ev));
                        emit();
                    }
                />
            </div>
        </div>
    }
}

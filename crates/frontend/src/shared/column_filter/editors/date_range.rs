use contracts::shared::column_filter::DateRangeFilter;
use leptos::prelude::*;

use super::{format_date, parse_date};
use crate::shared::column_filter::FilterEditor;

/// From/to date editor
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeFilterEditor;

impl FilterEditor for DateRangeFilterEditor {
    type Value = DateRangeFilter;

    fn init(&self) -> DateRangeFilter {
        DateRangeFilter::default()
    }

    fn element(
        &self,
        filter: Signal<DateRangeFilter>,
        on_filter_change: Callback<DateRangeFilter>,
    ) -> AnyView {
        view! {
            <div class="column-filter-editor column-filter-editor--dates">
                <input
                    type="date"
                    class="column-filter-editor__input"
                    prop:value=move || format_date(filter.with(|f| f.from))
                    on:change=move |ev| {
                        let mut next = filter.get_untracked();
                        next.from = parse_date(&event_target_value(&ev));
                        on_filter_change.run(next);
                    }
                />
                <span>" — "</span>
                <input
                    type="date"
                    class="column-filter-editor__input"
                    prop:value=move || format_date(filter.with(|f| f.to))
                    on:change=move |ev| {
                        let mut next = filter.get_untracked();
                        next.to = parse_date(&event_target_value(&ev));
                        on_filter_change.run(next);
                    }
                />
            </div>
        }
        .into_any()
    }
}

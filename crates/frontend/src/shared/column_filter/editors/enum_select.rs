use contracts::shared::column_filter::EnumFilter;
use leptos::prelude::*;

use crate::shared::column_filter::FilterEditor;

/// Multi-select over a fixed option list
#[derive(Debug, Clone, Default)]
pub struct EnumFilterEditor {
    pub options: Vec<String>,
}

impl EnumFilterEditor {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl FilterEditor for EnumFilterEditor {
    type Value = EnumFilter;

    fn init(&self) -> EnumFilter {
        EnumFilter::default()
    }

    fn element(&self, filter: Signal<EnumFilter>, on_filter_change: Callback<EnumFilter>) -> AnyView {
        let options = self.options.clone();
        view! {
            <div class="column-filter-editor column-filter-editor--enum">
                {options
                    .into_iter()
                    .map(|option| {
                        let checked_option = option.clone();
                        let toggled_option = option.clone();
                        view! {
                            <label class="column-filter-editor__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filter.with(|f| f.is_selected(&checked_option))
                                    on:change=move |_| {
                                        let mut next = filter.get_untracked();
                                        next.toggle(&toggled_option);
                                        on_filter_change.run(next);
                                    }
                                />
                                {option}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible panel hosting always-visible column filters
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback for the "reset all" button
    on_clear_all: Callback<()>,

    /// Filter content (editors)
    #[prop(into)]
    filter_content: ViewFn,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <Show when=move || { active_filters_count.get() > 0 }>
                    <button
                        class="button button--secondary filter-panel__reset"
                        on:click=move |_| on_clear_all.run(())
                    >
                        "Сбросить все"
                    </button>
                </Show>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel-tags">{tags.run()}</div>
            })}
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: Signal<String>,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Сбросить фильтр"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

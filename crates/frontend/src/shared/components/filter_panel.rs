use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter area with the pagination controls in its header
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    #[prop(into)] pagination_controls: ViewFn,
    #[prop(into)] filter_content: ViewFn,
) -> impl IntoView {
    let strings = use_strings();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">{move || strings.get().filters}</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
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
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <button class="filter-panel__clear" on:click=move |_| on_clear.run(())>
                            {icon("x")}
                            {move || strings.get().clear_filters}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use crm_contracts::shared::pagination::{PageSize, PaginationState};
use leptos::prelude::*;

/// First/prev/next/last buttons, "page / pages (total)" and the page size select.
///
/// Pages are 1-based, the same numbers that appear in `?page=`.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<PaginationState>,
    on_page_change: Callback<u32>,
    on_limit_change: Callback<PageSize>,
    #[prop(optional, into)] page_sizes: Option<Signal<Vec<PageSize>>>,
) -> impl IntoView {
    let strings = use_strings();
    let page_sizes = page_sizes.unwrap_or_else(|| Signal::stored(PageSize::ALL.to_vec()));

    let go = move |page: u32| {
        let p = pagination.get_untracked();
        let page = page.clamp(1, p.total_pages());
        if page != p.page {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || !pagination.get().has_prev()
                title=move || strings.get().first_page
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(pagination.get_untracked().page.saturating_sub(1))
                disabled=move || !pagination.get().has_prev()
                title=move || strings.get().prev_page
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {} ({})", p.page, p.total_pages(), p.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(pagination.get_untracked().page + 1)
                disabled=move || !pagination.get().has_next()
                title=move || strings.get().next_page
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(pagination.get_untracked().total_pages())
                disabled=move || !pagination.get().has_next()
                title=move || strings.get().last_page
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse::<u32>()
                        .ok()
                        .and_then(PageSize::from_value)
                        .unwrap_or_default();
                    on_limit_change.run(size);
                }
                prop:value=move || pagination.get().limit.value().to_string()
            >
                {move || {
                    page_sizes
                        .get()
                        .into_iter()
                        .map(|size| {
                            let value = size.value().to_string();
                            view! {
                                <option
                                    value=value.clone()
                                    selected=move || pagination.get().limit == size
                                >
                                    {value.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

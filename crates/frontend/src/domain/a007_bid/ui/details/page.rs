//! Bid details: header, tab bar and the active tab.
//!
//! The active tab lives in the `tab` query parameter, so a reload or a shared
//! link opens the same tab.

use super::tabs::{CalculationTab, GeneralTab, ResultsTab};
use super::view_model::BidDetailsVm;
use crate::shared::columns::resolve_relation;
use crate::shared::components::{ErrorState, LoadingState, PageHeader};
use crate::shared::i18n::{fill_one, use_strings};
use crate::shared::icons::icon;
use crate::shared::view_state::use_url_view_state;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidTab {
    General,
    Calculation,
    Results,
}

impl BidTab {
    pub fn key(self) -> &'static str {
        match self {
            BidTab::General => "general",
            BidTab::Calculation => "calculation",
            BidTab::Results => "results",
        }
    }

    /// Unknown tabs open `general`; `results` only once a forecast exists
    pub fn resolve(raw: Option<&str>, has_results: bool) -> Self {
        match raw {
            Some("calculation") => BidTab::Calculation,
            Some("results") if has_results => BidTab::Results,
            _ => BidTab::General,
        }
    }
}

pub fn parse_bid_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}

#[component]
pub fn BidDetails() -> impl IntoView {
    let strings = use_strings();
    let params = use_params_map();
    let location = use_location();
    let url = use_url_view_state();

    let bid_id = Memo::new(move |_| params.with(|p| parse_bid_id(p.get("id").as_deref())));
    let path = Signal::derive(move || location.pathname.get());

    let vm = BidDetailsVm::new();
    vm.bind(bid_id.into(), path);
    vm.load_products();

    let has_results = vm.has_results();
    let active = Memo::new(move |_| {
        url.state
            .with(|s| BidTab::resolve(s.tab.as_deref(), has_results.get()))
    });

    let title = Signal::derive(move || match bid_id.get() {
        Some(id) => fill_one(strings.get().bid_title, id),
        None => String::new(),
    });

    let detail = vm.detail;
    let subtitle = Signal::derive(move || {
        detail.with(|b| {
            b.as_ref()
                .map(|b| resolve_relation(b.customer.as_ref(), None))
        })
    });

    let tab_button = move |tab: BidTab, label: fn(&crate::shared::i18n::Strings) -> &'static str| {
        let disabled = move || tab == BidTab::Results && !has_results.get();
        view! {
            <button
                type="button"
                class=move || {
                    if active.get() == tab {
                        "detail-tabs__item detail-tabs__item--active"
                    } else {
                        "detail-tabs__item"
                    }
                }
                disabled=disabled
                on:click=move |_| url.set_tab(tab.key())
            >
                {move || label(strings.get())}
            </button>
        }
    };

    let on_calculated = Callback::new(move |_| url.set_tab(BidTab::Results.key()));

    let content = {
        let vm = vm.clone();
        move || {
            let vm = vm.clone();
            if let Some(message) = vm.error.get() {
                let retry = vm.clone();
                return view! {
                    <ErrorState message=message on_retry=Callback::new(move |_| retry.reload()) />
                }
                .into_any();
            }
            if vm.detail.with(Option::is_none) {
                return view! { <LoadingState /> }.into_any();
            }
            match active.get() {
                BidTab::General => view! { <GeneralTab vm=vm /> }.into_any(),
                BidTab::Calculation => {
                    view! { <CalculationTab vm=vm on_calculated=on_calculated /> }.into_any()
                }
                BidTab::Results => view! { <ResultsTab vm=vm /> }.into_any(),
            }
        }
    };

    let reload = {
        let vm = vm.clone();
        move |_| vm.reload()
    };
    let loading = vm.loading;

    view! {
        <div class="page bid-details">
            <PageHeader title=title subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=reload
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || strings.get().refresh}
                </Button>
            </PageHeader>

            <div class="detail-tabs">
                {tab_button(BidTab::General, |s| s.tab_general)}
                {tab_button(BidTab::Calculation, |s| s.tab_calculation)}
                {tab_button(BidTab::Results, |s| s.tab_results)}
            </div>

            <div class="page-content">{content}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_tab_needs_forecast() {
        assert_eq!(BidTab::resolve(Some("results"), false), BidTab::General);
        assert_eq!(BidTab::resolve(Some("results"), true), BidTab::Results);
        assert_eq!(BidTab::resolve(Some("calculation"), false), BidTab::Calculation);
        assert_eq!(BidTab::resolve(Some("bogus"), true), BidTab::General);
        assert_eq!(BidTab::resolve(None, true), BidTab::General);
    }

    #[test]
    fn test_parse_bid_id() {
        assert_eq!(parse_bid_id(Some("12")), Some(12));
        assert_eq!(parse_bid_id(Some("abc")), None);
        assert_eq!(parse_bid_id(Some("0")), None);
        assert_eq!(parse_bid_id(None), None);
    }
}

//! Results tab: the last forecast of this bid

use super::super::view_model::BidDetailsVm;
use super::{lines_table, TotalsView};
use crate::shared::i18n::use_strings;
use leptos::prelude::*;

#[component]
pub fn ResultsTab(vm: BidDetailsVm) -> impl IntoView {
    let strings = use_strings();
    let forecast = vm.forecast;
    let bid_id = vm.bid_id;
    let catalog = Signal::derive({
        let products = vm.products;
        move || products.get()
    });

    let result = Memo::new(move |_| {
        let id = bid_id.get()?;
        forecast.with(|f| f.results_for(id).cloned())
    });

    move || match result.get() {
        Some(bid) => view! {
            {lines_table(bid.products, bid.services, catalog)}
            <TotalsView totals=bid.totals />
        }
        .into_any(),
        None => view! {
            <div class="details-section__empty">{move || strings.get().results_empty}</div>
        }
        .into_any(),
    }
}

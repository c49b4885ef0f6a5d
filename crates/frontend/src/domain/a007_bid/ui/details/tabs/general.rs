//! General tab: bid header fields, lines, payments and totals

use super::super::view_model::BidDetailsVm;
use super::{lines_table, TotalsView};
use crate::shared::columns::{resolve_relation, text_or_placeholder};
use crate::shared::format::{format_money_with_code, format_opt_datetime};
use crate::shared::i18n::use_strings;
use crm_contracts::domain::a007_bid::BidTransaction;
use leptos::prelude::*;
use thaw::*;

fn transaction_row(t: BidTransaction) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell>{format_opt_datetime(t.paid_at.as_ref())}</TableCell>
            <TableCell class="cell--right">
                {format_money_with_code(t.amount, t.currency.as_deref().unwrap_or(""))}
            </TableCell>
            <TableCell>{text_or_placeholder(t.note.as_deref())}</TableCell>
        </TableRow>
    }
}

#[component]
pub fn GeneralTab(vm: BidDetailsVm) -> impl IntoView {
    let strings = use_strings();
    let detail = vm.detail;
    let catalog = Signal::derive({
        let products = vm.products;
        move || products.get()
    });

    let field = move |label: &'static str, value: String| {
        view! {
            <div class="details-grid__item">
                <span class="details-grid__label">{label}</span>
                <span class="details-grid__value">{value}</span>
            </div>
        }
    };

    move || {
        let Some(bid) = detail.get() else {
            return ().into_any();
        };
        let s = strings.get();
        let totals = bid.totals;
        let transactions = bid.transactions;

        view! {
            <div class="details-section">
                <div class="details-grid">
                    {field(s.field_customer, resolve_relation(bid.customer.as_ref(), None))}
                    {field(s.field_branch, resolve_relation(bid.branch.as_ref(), None))}
                    {field(s.field_status, resolve_relation(bid.status.as_ref(), None))}
                    {field(s.field_created_at, format_opt_datetime(bid.created_at.as_ref()))}
                    {field(s.field_comment, text_or_placeholder(bid.comment.as_deref()))}
                </div>
            </div>

            {lines_table(bid.products.clone(), bid.services.clone(), catalog)}

            <div class="details-section">
                <h4 class="details-section__title">{s.transactions}</h4>
                {if transactions.is_empty() {
                    view! { <div class="details-section__empty">{s.empty_table}</div> }.into_any()
                } else {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>{s.field_paid_at}</TableHeaderCell>
                                    <TableHeaderCell class="cell--right">{s.field_amount}</TableHeaderCell>
                                    <TableHeaderCell>{s.field_note}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {transactions.into_iter().map(transaction_row).collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }}
            </div>

            <TotalsView totals=totals />
        }
        .into_any()
    }
}

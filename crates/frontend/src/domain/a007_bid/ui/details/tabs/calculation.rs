//! Calculation tab: editable product and service lines with a local
//! estimate, and the forecast request.

use super::super::view_model::BidDetailsVm;
use super::{parse_amount, TotalsView};
use crate::domain::a007_bid::forecast::LineDraft;
use crate::shared::format::format_money;
use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

fn product_row(vm: BidDetailsVm, index: usize) -> impl IntoView {
    let strings = use_strings();
    let draft = vm.draft;
    let products = vm.products;

    let line_value = move |f: fn(&crm_contracts::domain::a007_bid::BidProduct) -> String| {
        move || draft.with(|d| d.products.get(index).map(f).unwrap_or_default())
    };
    let selected = line_value(|l| l.product.id().to_string());
    let quantity = line_value(|l| l.quantity.to_string());
    let price = line_value(|l| l.price.to_string());
    let amount = line_value(|l| format_money(l.amount()));

    let pick = {
        let vm = vm.clone();
        move |raw: String| {
            let Some(product) = raw.parse::<i64>().ok().and_then(|id| vm.product(id)) else {
                return;
            };
            draft.update(|d| d.set_product(index, &product));
        }
    };

    view! {
        <TableRow>
            <TableCell>
                <select class="form__input" prop:value=selected on:change=move |ev| pick(event_target_value(&ev))>
                    {move || {
                        let current = selected();
                        products
                            .get()
                            .into_iter()
                            .map(|p| {
                                let id = p.id.to_string();
                                let is_selected = id == current;
                                view! { <option value=id selected=is_selected>{p.name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </TableCell>
            <TableCell>
                <input
                    class="form__input form__input--number"
                    inputmode="decimal"
                    prop:value=quantity
                    on:change=move |ev| {
                        if let Some(v) = parse_amount(&event_target_value(&ev)) {
                            draft.update(|d| d.set_quantity(index, v));
                        }
                    }
                />
            </TableCell>
            <TableCell>
                <input
                    class="form__input form__input--number"
                    inputmode="decimal"
                    prop:value=price
                    on:change=move |ev| {
                        if let Some(v) = parse_amount(&event_target_value(&ev)) {
                            draft.update(|d| d.set_price(index, v));
                        }
                    }
                />
            </TableCell>
            <TableCell class="cell--right">{amount}</TableCell>
            <TableCell>
                <button
                    class="icon-btn icon-btn--danger"
                    title=move || strings.get().remove_line
                    on:click=move |_| draft.update(|d| d.remove_product(index))
                >
                    {icon("trash")}
                </button>
            </TableCell>
        </TableRow>
    }
}

fn service_row(draft: RwSignal<LineDraft>, index: usize) -> impl IntoView {
    let strings = use_strings();
    let name = move || draft.with(|d| d.services.get(index).map(|s| s.name.clone()).unwrap_or_default());
    let price = move || {
        draft.with(|d| d.services.get(index).map(|s| s.price.to_string()).unwrap_or_default())
    };

    view! {
        <TableRow>
            <TableCell>
                <input
                    class="form__input"
                    prop:value=name
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.set_service_name(index, value));
                    }
                />
            </TableCell>
            <TableCell>
                <input
                    class="form__input form__input--number"
                    inputmode="decimal"
                    prop:value=price
                    on:change=move |ev| {
                        if let Some(v) = parse_amount(&event_target_value(&ev)) {
                            draft.update(|d| d.set_service_price(index, v));
                        }
                    }
                />
            </TableCell>
            <TableCell>
                <button
                    class="icon-btn icon-btn--danger"
                    title=move || strings.get().remove_line
                    on:click=move |_| draft.update(|d| d.remove_service(index))
                >
                    {icon("trash")}
                </button>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn CalculationTab(vm: BidDetailsVm, on_calculated: Callback<()>) -> impl IntoView {
    let strings = use_strings();
    let draft = vm.draft;
    let detail = vm.detail;
    let products = vm.products;
    let calculating = vm.is_calculating();

    let estimate = Signal::derive(move || {
        let transactions = detail.with(|b| b.as_ref().map(|b| b.transactions.clone()).unwrap_or_default());
        draft.with(|d| d.estimate(&transactions))
    });

    let add_product = move |_| {
        let first = products.with_untracked(|p| p.first().cloned());
        if let Some(product) = first {
            draft.update(|d| d.add_product(&product));
        }
    };
    let add_service = move |_| draft.update(LineDraft::add_service);

    let calculate = {
        let vm = vm.clone();
        move |_| vm.calculate(on_calculated)
    };
    let cannot_calculate =
        Signal::derive(move || calculating.get() || draft.with(LineDraft::is_empty));

    // rows are rebuilt only when lines are added or removed
    let product_count = Memo::new(move |_| draft.with(|d| d.products.len()));
    let service_count = Memo::new(move |_| draft.with(|d| d.services.len()));
    let product_rows = {
        let vm = vm.clone();
        move || {
            (0..product_count.get())
                .map(|i| product_row(vm.clone(), i))
                .collect_view()
        }
    };
    let service_rows = move || {
        (0..service_count.get())
            .map(|i| service_row(draft, i))
            .collect_view()
    };

    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h4 class="details-section__title">{move || strings.get().product_lines}</h4>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=add_product
                    disabled=Signal::derive(move || products.with(Vec::is_empty))
                >
                    {icon("plus")}
                    {move || strings.get().add_product}
                </Button>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || strings.get().field_product}</TableHeaderCell>
                        <TableHeaderCell>{move || strings.get().field_quantity}</TableHeaderCell>
                        <TableHeaderCell>{move || strings.get().field_price}</TableHeaderCell>
                        <TableHeaderCell class="cell--right">{move || strings.get().field_amount}</TableHeaderCell>
                        <TableHeaderCell class="cell--actions">""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{product_rows}</TableBody>
            </Table>
        </div>

        <div class="details-section">
            <div class="details-section__header">
                <h4 class="details-section__title">{move || strings.get().service_lines}</h4>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=add_service>
                    {icon("plus")}
                    {move || strings.get().add_service}
                </Button>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || strings.get().field_service}</TableHeaderCell>
                        <TableHeaderCell>{move || strings.get().field_price}</TableHeaderCell>
                        <TableHeaderCell class="cell--actions">""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{service_rows}</TableBody>
            </Table>
        </div>

        <div class="details-section">
            <p class="details-section__hint">{move || strings.get().estimate_hint}</p>
            <TotalsView totals=estimate />
            <div class="details-section__actions">
                <Button appearance=ButtonAppearance::Primary on_click=calculate disabled=cannot_calculate>
                    {icon("calculator")}
                    {move || {
                        let s = strings.get();
                        if calculating.get() { s.calculating } else { s.calculate }
                    }}
                </Button>
            </div>
        </div>
    }
}

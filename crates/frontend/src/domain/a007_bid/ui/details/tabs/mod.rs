//! Tabs of the bid details screen

mod calculation;
mod general;
mod results;

pub use calculation::CalculationTab;
pub use general::GeneralTab;
pub use results::ResultsTab;

use crate::shared::columns::resolve_relation;
use crate::shared::config::use_app_config;
use crate::shared::format::{format_money, format_money_with_code};
use crate::shared::i18n::use_strings;
use crm_contracts::domain::a005_product::Product;
use crm_contracts::domain::a007_bid::{BidProduct, BidService, BidTotals};
use leptos::prelude::*;
use thaw::*;

/// Number typed into a line editor; comma decimals are accepted
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let normalized: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Product name of a line, looked up in the loaded catalog when the line
/// carries only an id
pub(crate) fn product_label(line: &BidProduct, catalog: &[Product]) -> String {
    let fetched = catalog
        .iter()
        .find(|p| p.id == line.product.id())
        .map(|p| p.name.as_str());
    resolve_relation(Some(&line.product), fetched)
}

/// Read-only product and service lines
pub(crate) fn lines_table(
    products: Vec<BidProduct>,
    services: Vec<BidService>,
    catalog: Signal<Vec<Product>>,
) -> impl IntoView {
    let strings = use_strings();
    let product_rows = products
        .into_iter()
        .map(|line| {
            let label = catalog.with(|c| product_label(&line, c));
            view! {
                <TableRow>
                    <TableCell>{label}</TableCell>
                    <TableCell class="cell--right">{format_money(line.quantity)}</TableCell>
                    <TableCell class="cell--right">{format_money(line.price)}</TableCell>
                    <TableCell class="cell--right">{format_money(line.amount())}</TableCell>
                </TableRow>
            }
        })
        .collect_view();
    let service_rows = services
        .into_iter()
        .map(|line| {
            view! {
                <TableRow>
                    <TableCell>{line.name}</TableCell>
                    <TableCell class="cell--right">{format_money(line.price)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="details-section">
            <h4 class="details-section__title">{move || strings.get().product_lines}</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || strings.get().field_product}</TableHeaderCell>
                        <TableHeaderCell class="cell--right">{move || strings.get().field_quantity}</TableHeaderCell>
                        <TableHeaderCell class="cell--right">{move || strings.get().field_price}</TableHeaderCell>
                        <TableHeaderCell class="cell--right">{move || strings.get().field_amount}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{product_rows}</TableBody>
            </Table>
        </div>
        <div class="details-section">
            <h4 class="details-section__title">{move || strings.get().service_lines}</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || strings.get().field_service}</TableHeaderCell>
                        <TableHeaderCell class="cell--right">{move || strings.get().field_price}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{service_rows}</TableBody>
            </Table>
        </div>
    }
}

/// Subtotals, paid, balance and the total in the tenant currency
#[component]
pub(crate) fn TotalsView(#[prop(into)] totals: Signal<BidTotals>) -> impl IntoView {
    let strings = use_strings();
    let config = use_app_config();

    let local_total = move || {
        let t = totals.get();
        config.with(|c| {
            let org = &c.organization;
            format_money_with_code(t.total_in_local(org.currency_rate), &org.currency_code)
        })
    };

    let row = move |label: fn(&crate::shared::i18n::Strings) -> &'static str, value: fn(&BidTotals) -> f64| {
        view! {
            <div class="totals__row">
                <span class="totals__label">{move || label(strings.get())}</span>
                <span class="totals__value">{move || format_money(value(&totals.get()))}</span>
            </div>
        }
    };

    view! {
        <div class="totals">
            {row(|s| s.subtotal_products, |t| t.products)}
            {row(|s| s.subtotal_services, |t| t.services)}
            {row(|s| s.field_total, |t| t.total)}
            {row(|s| s.paid, |t| t.paid)}
            {row(|s| s.balance, |t| t.balance)}
            <div class="totals__row totals__row--accent">
                <span class="totals__label">{move || strings.get().total_local}</span>
                <span class="totals__value">{local_total}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::domain::common::Relation;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 1 200,75 "), Some(1200.75));
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_product_label_prefers_catalog() {
        let line = BidProduct {
            id: None,
            product: Relation::Reference(7),
            quality: None,
            quantity: 2.0,
            price: 10.0,
        };
        let catalog = vec![Product {
            id: 7,
            name: "Oak door".into(),
            ..Product::default()
        }];
        assert_eq!(product_label(&line, &catalog), "Oak door");
        assert_eq!(product_label(&line, &[]), "7");
    }
}

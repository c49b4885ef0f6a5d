use serde::{Deserialize, Serialize};

use super::{BidProduct, BidService, BidTransaction};
use crate::domain::common::Relation;

/// Derived money figures of a bid, in the base currency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BidTotals {
    #[serde(default)]
    pub products: f64,
    #[serde(default)]
    pub services: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub paid: f64,
    #[serde(default)]
    pub balance: f64,
}

impl BidTotals {
    /// Local estimate shown while editing lines; the server result of a
    /// forecast call is authoritative.
    pub fn estimate(
        products: &[BidProduct],
        services: &[BidService],
        transactions: &[BidTransaction],
    ) -> Self {
        let products_sum: f64 = products.iter().map(BidProduct::amount).sum();
        let services_sum: f64 = services.iter().map(|s| s.price).sum();
        let paid: f64 = transactions.iter().map(|t| t.amount).sum();
        let total = products_sum + services_sum;
        Self {
            products: products_sum,
            services: services_sum,
            total,
            paid,
            balance: total - paid,
        }
    }

    /// Total converted with the tenant currency rate
    pub fn total_in_local(&self, currency_rate: f64) -> f64 {
        self.total * currency_rate
    }
}

/// Body of `POST /applications/forecast/?id=<id>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub products: Vec<BidProduct>,
    pub services: Vec<BidService>,
}

impl ForecastRequest {
    /// Relations are sent as bare ids
    pub fn from_lines(products: &[BidProduct], services: &[BidService]) -> Self {
        Self {
            products: products
                .iter()
                .map(|line| BidProduct {
                    product: line.product.to_reference(),
                    quality: line.quality.as_ref().map(Relation::to_reference),
                    ..line.clone()
                })
                .collect(),
            services: services.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_product::Product;

    fn line(quantity: f64, price: f64) -> BidProduct {
        BidProduct {
            id: None,
            product: Relation::Inline(Product {
                id: 4,
                name: "Panel".into(),
                ..Product::default()
            }),
            quality: None,
            quantity,
            price,
        }
    }

    #[test]
    fn test_estimate_totals() {
        let services = vec![BidService {
            id: None,
            name: "Delivery".into(),
            price: 15.0,
        }];
        let transactions = vec![BidTransaction {
            id: 1,
            amount: 50.0,
            currency: None,
            paid_at: None,
            note: None,
        }];
        let totals = BidTotals::estimate(&[line(2.0, 10.0), line(1.5, 20.0)], &services, &transactions);
        assert_eq!(totals.products, 50.0);
        assert_eq!(totals.services, 15.0);
        assert_eq!(totals.total, 65.0);
        assert_eq!(totals.balance, 15.0);
        assert_eq!(totals.total_in_local(12_000.0), 780_000.0);
    }

    #[test]
    fn test_forecast_request_sends_ids() {
        let request = ForecastRequest::from_lines(&[line(1.0, 1.0)], &[]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["products"][0]["product"], serde_json::json!(4));
    }
}

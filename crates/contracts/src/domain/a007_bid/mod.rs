//! Заявка (bid / application) with its nested line items

pub mod forecast;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::Branch;
use crate::domain::a003_customer::Customer;
use crate::domain::a004_quality::Quality;
use crate::domain::a005_product::Product;
use crate::domain::a006_factory_status::FactoryStatus;
use crate::domain::common::{ApiResource, Record, Relation};

pub use forecast::{BidTotals, ForecastRequest};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bid {
    pub id: i64,
    #[serde(default)]
    pub customer: Option<Relation<Customer>>,
    #[serde(default)]
    pub branch: Option<Relation<Branch>>,
    #[serde(default)]
    pub status: Option<Relation<FactoryStatus>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub products: Vec<BidProduct>,
    #[serde(default)]
    pub services: Vec<BidService>,
    #[serde(default)]
    pub transactions: Vec<BidTransaction>,
    /// Filled in by the server; stale until the next forecast
    #[serde(default)]
    pub totals: BidTotals,
}

impl Record for Bid {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("#{}", self.id)
    }
}

impl ApiResource for Bid {
    const ENDPOINT: &'static str = "/applications/";
}

/// Product line of a bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidProduct {
    #[serde(default)]
    pub id: Option<i64>,
    pub product: Relation<Product>,
    #[serde(default)]
    pub quality: Option<Relation<Quality>>,
    pub quantity: f64,
    pub price: f64,
}

impl BidProduct {
    pub fn amount(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Additional service line (delivery, installation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidService {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
}

/// Payment received against a bid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidTransaction {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::domain::a002_category::Category;
use crate::domain::a004_quality::Quality;
use crate::domain::common::{ApiResource, Record, Relation};

/// Номенклатура, которую можно добавить в заявку
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<Relation<Category>>,
    #[serde(default)]
    pub quality: Option<Relation<Quality>>,
    /// Price per unit in the base currency
    #[serde(default)]
    pub price: f64,
    /// Path relative to the tenant's static host
    #[serde(default)]
    pub image: Option<String>,
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ApiResource for Product {
    const ENDPOINT: &'static str = "/products/";
}

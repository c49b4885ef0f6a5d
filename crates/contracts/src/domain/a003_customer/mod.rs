use serde::{Deserialize, Serialize};

use crate::domain::a001_branch::Branch;
use crate::domain::common::{ApiResource, DeleteStyle, Record, Relation};

/// Клиент (заказчик)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    #[serde(default)]
    pub branch: Option<Relation<Branch>>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Record for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.full_name.clone()
    }
}

impl ApiResource for Customer {
    const ENDPOINT: &'static str = "/customers/";
    const ID_FIELD: &'static str = "customer_id";
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Body;
}

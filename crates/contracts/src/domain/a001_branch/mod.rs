use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, Record};

/// Филиал компании
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Record for Branch {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ApiResource for Branch {
    const ENDPOINT: &'static str = "/branches/";
}

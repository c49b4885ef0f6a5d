use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, Record};

/// Product category
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Record for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ApiResource for Category {
    const ENDPOINT: &'static str = "/categories/";
}

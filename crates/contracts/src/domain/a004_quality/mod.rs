use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, Record};

/// Quality grade a product can be ordered in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quality {
    pub id: i64,
    pub name: String,
}

impl Record for Quality {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ApiResource for Quality {
    const ENDPOINT: &'static str = "/qualities/";
}

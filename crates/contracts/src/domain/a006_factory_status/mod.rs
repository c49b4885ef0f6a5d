use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, DeleteStyle, Record};

/// Production stage a bid can be in at the factory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactoryStatus {
    pub id: i64,
    pub name: String,
    /// CSS color of the status badge, e.g. `#1e88e5`
    #[serde(default)]
    pub color: Option<String>,
}

impl Record for FactoryStatus {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ApiResource for FactoryStatus {
    const ENDPOINT: &'static str = "/factory-statuses/";
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Body;
}

use serde::{Deserialize, Serialize};

/// Tenant-wide settings managed by administrators (`GET/PUT /settings/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSettings {
    #[serde(default)]
    pub company_name: String,
    /// Units of the local currency per one unit of the base currency
    pub currency_rate: f64,
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    /// Host serving uploaded product images, e.g. `https://cdn.example.uz`
    #[serde(default)]
    pub static_host: Option<String>,
}

fn default_currency_code() -> String {
    "UZS".to_string()
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            currency_rate: 1.0,
            currency_code: default_currency_code(),
            static_host: None,
        }
    }
}

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::query::RetryPolicy;
use crm_contracts::system::settings::OrganizationSettings;

pub const SETTINGS_PATH: &str = "/settings/";

pub async fn fetch_settings(
    api: &ApiClient,
    retry: RetryPolicy,
) -> Result<OrganizationSettings, ApiError> {
    api.get_json(SETTINGS_PATH, retry).await
}

/// `PUT /settings/`; answers with the stored settings
pub async fn save_settings(
    api: &ApiClient,
    payload: &serde_json::Value,
) -> Result<serde_json::Value, ApiError> {
    api.put_json(SETTINGS_PATH, payload).await
}

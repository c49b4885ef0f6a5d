//! Requests of the bid details screen

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::query::{QueryKey, RetryPolicy};
use crate::shared::view_state::ViewState;
use crm_contracts::domain::a005_product::Product;
use crm_contracts::domain::a007_bid::{Bid, ForecastRequest};
use crm_contracts::domain::common::ApiResource;
use crm_contracts::shared::pagination::PageSize;

pub const DETAIL_KEY: &str = "application-detail";

pub fn detail_key(id: i64) -> QueryKey {
    QueryKey::new(DETAIL_KEY).with_id(id)
}

/// `POST /applications/forecast/?id=<id>`
pub fn forecast_path(id: i64) -> String {
    format!("{}forecast/?id={}", Bid::ENDPOINT, id)
}

pub async fn fetch_bid(api: &ApiClient, id: i64, retry: RetryPolicy) -> Result<Bid, ApiError> {
    api.get::<Bid>(id, retry).await
}

pub async fn post_forecast(
    api: &ApiClient,
    id: i64,
    request: &ForecastRequest,
) -> Result<Bid, ApiError> {
    api.post_json(&forecast_path(id), request).await
}

/// Products offered in the line editor (first hundred)
pub async fn fetch_products(api: &ApiClient, retry: RetryPolicy) -> Result<Vec<Product>, ApiError> {
    let view = ViewState {
        limit: PageSize::Hundred,
        ..ViewState::default()
    };
    Ok(api.list::<Product>(&view, retry).await?.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_keys() {
        assert_eq!(forecast_path(12), "/applications/forecast/?id=12");
        assert!(QueryKey::new(DETAIL_KEY).is_prefix_of(&detail_key(12)));
        assert_ne!(detail_key(12), detail_key(13));
    }
}

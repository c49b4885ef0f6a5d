//! REST client of the console.
//!
//! Thin layer over `gloo-net`: attaches the bearer token, maps statuses to
//! [`ApiError`] and reports 401 on the event bus so the shell can send the
//! user to the login screen. Components never handle 401 themselves.

mod error;
pub mod url;

pub use error::ApiError;

use crate::shared::events::{AppEvent, AppEventBus};
use crate::shared::query::RetryPolicy;
use crate::shared::view_state::ViewState;
use crate::system::auth::storage;
use crm_contracts::domain::common::{ApiResource, DeleteStyle};
use crm_contracts::shared::pagination::ListResponse;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    events: AppEventBus,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, events: AppEventBus) -> Self {
        Self {
            base: base.into(),
            events,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute(&self, request: Request) -> Result<String, ApiError> {
        let method = request.method();
        let url = request.url();
        let response = request.send().await.map_err(|e| {
            log::warn!("{:?} {} failed: {}", method, url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if (200..300).contains(&status) {
            return Ok(body);
        }

        log::warn!("{:?} {} -> {}", method, url, status);
        let error = ApiError::from_status(status, &body);
        if error == ApiError::Unauthorized {
            self.events.emit(AppEvent::Unauthorized);
        }
        Err(error)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let request = self
            .authorized(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.execute(request).await
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<String, ApiError> {
        let request = self
            .authorized(builder)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(request).await
    }

    /// GET with the query cache's retry policy applied
    pub async fn get_text(&self, url: &str, retry: RetryPolicy) -> Result<String, ApiError> {
        let mut attempt = 1;
        loop {
            match self.send_empty(Request::get(url)).await {
                Err(e) if retry.should_retry(&e, attempt) => {
                    log::debug!("retrying {} after {} (attempt {})", url, e, attempt);
                    gloo_timers::future::TimeoutFuture::new(retry.delay_ms(attempt)).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        retry: RetryPolicy,
    ) -> Result<T, ApiError> {
        let text = self.get_text(&self.url(path), retry).await?;
        decode(&text)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.send_json(Request::post(&self.url(path)), body).await?;
        decode(&text)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self.send_json(Request::put(&self.url(path)), body).await?;
        decode(&text)
    }

    /// One page of `R` for the given view state
    pub async fn list<R: ApiResource>(
        &self,
        view: &ViewState,
        retry: RetryPolicy,
    ) -> Result<ListResponse<R>, ApiError> {
        let url = url::list_url(&self.base, R::ENDPOINT, view);
        let text = self.get_text(&url, retry).await?;
        ListResponse::from_json(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<R: ApiResource>(&self, id: i64, retry: RetryPolicy) -> Result<R, ApiError> {
        let url = url::detail_url(&self.base, R::ENDPOINT, id);
        let text = self.get_text(&url, retry).await?;
        decode(&text)
    }

    /// `POST <endpoint>`
    pub async fn create<R: ApiResource>(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let text = self
            .send_json(Request::post(&self.url(R::ENDPOINT)), payload)
            .await?;
        decode_or_null(&text)
    }

    /// `PUT <endpoint>?<id_field>=<id>`
    pub async fn update<R: ApiResource>(
        &self,
        id: i64,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = url::item_url(&self.base, R::ENDPOINT, R::ID_FIELD, id);
        let text = self.send_json(Request::put(&url), payload).await?;
        decode_or_null(&text)
    }

    /// Deletes with the wire style the resource declares
    pub async fn delete<R: ApiResource>(&self, id: i64) -> Result<(), ApiError> {
        match R::DELETE_STYLE {
            DeleteStyle::Query => {
                let url = url::item_url(&self.base, R::ENDPOINT, R::ID_FIELD, id);
                self.send_empty(Request::delete(&url)).await?;
            }
            DeleteStyle::Body => {
                self.send_json(Request::delete(&self.url(R::ENDPOINT)), &R::delete_body(id))
                    .await?;
            }
        }
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutations may answer 204 with no body
fn decode_or_null(text: &str) -> Result<serde_json::Value, ApiError> {
    if text.trim().is_empty() {
        Ok(serde_json::Value::Null)
    } else {
        decode(text)
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mutation_body_is_null() {
        assert_eq!(decode_or_null("  "), Ok(serde_json::Value::Null));
        assert!(matches!(decode_or_null("<html>"), Err(ApiError::Decode(_))));
    }
}

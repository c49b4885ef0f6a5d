//! ViewModel of the bid details screen.
//!
//! Owns the loaded bid, the line draft of the calculation tab and the
//! forecast state. Everything is scoped to the bid id in the route: a new id
//! resets the draft and drops forecast results of the previous bid.

use super::model;
use crate::domain::a007_bid::forecast::{run_forecast, ForecastState, LineDraft};
use crate::domain::a007_bid::resource::bid_path;
use crate::shared::api::{use_api, ApiClient, ApiError};
use crate::shared::events::{use_event_bus, AppEvent, AppEventBus};
use crate::shared::i18n::{use_strings, Strings};
use crate::shared::notify::{use_notifier, NotificationService};
use crate::shared::query::{use_query_client, QueryClient};
use crate::shared::table::RequestSeq;
use crm_contracts::domain::a005_product::Product;
use crm_contracts::domain::a007_bid::Bid;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Full-page event for a failed detail load; `None` keeps the error inline
pub fn failure_event(error: &ApiError, path: &str) -> Option<AppEvent> {
    match error {
        ApiError::NotFound => Some(AppEvent::NotFound {
            path: path.to_string(),
        }),
        ApiError::Server { message, .. } => Some(AppEvent::ServerError {
            message: message.clone(),
        }),
        _ => None,
    }
}

#[derive(Clone)]
pub struct BidDetailsVm {
    pub bid_id: RwSignal<Option<i64>>,
    pub detail: RwSignal<Option<Bid>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub draft: RwSignal<LineDraft>,
    pub forecast: RwSignal<ForecastState>,
    pub products: RwSignal<Vec<Product>>,
    seq: StoredValue<RequestSeq>,
    api: ApiClient,
    client: QueryClient,
    notifier: NotificationService,
    events: AppEventBus,
    strings: Signal<&'static Strings>,
}

impl BidDetailsVm {
    pub fn new() -> Self {
        Self {
            bid_id: RwSignal::new(None),
            detail: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            draft: RwSignal::new(LineDraft::default()),
            forecast: RwSignal::new(ForecastState::default()),
            products: RwSignal::new(Vec::new()),
            seq: StoredValue::new(RequestSeq::default()),
            api: use_api(),
            client: use_query_client(),
            notifier: use_notifier(),
            events: use_event_bus(),
            strings: use_strings(),
        }
    }

    /// Follows the route id: reloads on id change and on invalidation of
    /// `["application-detail", id]`
    pub fn bind(&self, route_id: Signal<Option<i64>>, path: Signal<String>) {
        let this = self.clone();
        Effect::new(move |prev: Option<Option<(i64, u64)>>| {
            let Some(id) = route_id.get() else {
                this.events.emit(AppEvent::NotFound {
                    path: path.get_untracked(),
                });
                return None;
            };
            let key = model::detail_key(id);
            this.client.register(&key);
            let current = (id, this.client.generation(&key));
            // registering a new key touches the registry and re-runs this effect
            if prev.flatten() == Some(current) {
                return Some(current);
            }

            if this.bid_id.get_untracked() != Some(id) {
                this.bid_id.set(Some(id));
                this.detail.set(None);
                this.draft.set(LineDraft::default());
                this.forecast.update(|f| f.reset_for(id));
            }
            log::debug!("load bid {} gen={}", id, current.1);
            this.load(id);
            Some(current)
        });

        let forecast = self.forecast;
        on_cleanup(move || {
            forecast.try_update(ForecastState::clear);
        });
    }

    fn load(&self, id: i64) {
        let Some(ticket) = self.seq.try_update_value(|s| s.next()) else {
            return;
        };
        self.loading.set(true);
        self.error.set(None);

        let this = self.clone();
        spawn_local(async move {
            let result = model::fetch_bid(&this.api, id, this.client.retry).await;
            if !this.seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(bid) => {
                    let first_load = this.detail.with_untracked(Option::is_none);
                    if first_load || this.draft.with_untracked(LineDraft::is_empty) {
                        this.draft.try_set(LineDraft::from_bid(&bid));
                    }
                    this.detail.try_set(Some(bid));
                }
                Err(e) => {
                    log::warn!("bid {} not loaded: {}", id, e);
                    match failure_event(&e, &bid_path(id)) {
                        Some(event) => this.events.emit(event),
                        None => {
                            let strings = this.strings.get_untracked();
                            this.error.try_set(Some(e.user_message(strings.load_failed)));
                        }
                    }
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn reload(&self) {
        if let Some(id) = self.bid_id.get_untracked() {
            self.load(id);
        }
    }

    /// Products for the line editor, fetched once per screen
    pub fn load_products(&self) {
        if self.products.with_untracked(|p| !p.is_empty()) {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            match model::fetch_products(&this.api, this.client.retry).await {
                Ok(items) => {
                    this.products.try_set(items);
                }
                Err(e) => log::warn!("products for line editor not loaded: {}", e),
            }
        });
    }

    pub fn product(&self, id: i64) -> Option<Product> {
        self.products
            .with_untracked(|items| items.iter().find(|p| p.id == id).cloned())
    }

    /// Sends the draft to the forecast endpoint; `on_done` runs once a
    /// result for this bid is stored
    pub fn calculate(&self, on_done: Callback<()>) {
        let Some(id) = self.bid_id.get_untracked() else {
            return;
        };
        let request = self.draft.with_untracked(LineDraft::request);
        let this = self.clone();
        spawn_local(async move {
            let strings = this.strings.get_untracked();
            let api = this.api.clone();
            let stored = run_forecast(
                &this.forecast,
                id,
                request,
                &this.notifier,
                strings,
                |id, request| async move { model::post_forecast(&api, id, &request).await },
            )
            .await;
            if stored {
                on_done.run(());
            }
        });
    }

    pub fn is_calculating(&self) -> Signal<bool> {
        let forecast = self.forecast;
        Signal::derive(move || forecast.with(ForecastState::is_running))
    }

    pub fn has_results(&self) -> Signal<bool> {
        let forecast = self.forecast;
        let bid_id = self.bid_id;
        Signal::derive(move || {
            bid_id
                .get()
                .map(|id| forecast.with(|f| f.has_results_for(id)))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_event() {
        assert_eq!(
            failure_event(&ApiError::NotFound, "/bids/9"),
            Some(AppEvent::NotFound {
                path: "/bids/9".into()
            })
        );
        assert_eq!(
            failure_event(
                &ApiError::Server {
                    status: 502,
                    message: Some("upstream".into())
                },
                "/bids/9"
            ),
            Some(AppEvent::ServerError {
                message: Some("upstream".into())
            })
        );
        assert_eq!(failure_event(&ApiError::Network("offline".into()), "/bids/9"), None);
        assert_eq!(failure_event(&ApiError::Unauthorized, "/bids/9"), None);
    }
}

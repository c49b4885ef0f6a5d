//! Paged table data bound to a view state and a cache key.

mod data_table;

pub use data_table::{data_table, RowActions};

use crate::shared::api::{use_api, ApiError};
use crate::shared::query::{use_query_client, CacheInvalidator, QueryClient, QueryKey};
use crate::shared::view_state::ViewState;
use crm_contracts::domain::common::ApiResource;
use crm_contracts::shared::pagination::{ListResponse, PaginationState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Loaded page of `R` with its loading/error state
pub struct TableData<R: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<R>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub pagination: RwSignal<PaginationState>,
    key: QueryKey,
    client: QueryClient,
}

impl<R: Send + Sync + 'static> Clone for TableData<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            is_loading: self.is_loading,
            error: self.error,
            pagination: self.pagination,
            key: self.key.clone(),
            client: self.client,
        }
    }
}

impl<R: Send + Sync + 'static> TableData<R> {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Refetch through the cache, so every reader of the key refreshes
    pub fn reload(&self) {
        self.client.invalidate(&self.key);
    }
}

/// Request counter: only the latest request may write its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Outcome of one list request, applied to the table state
pub fn page_state<R>(view: &ViewState, response: &ListResponse<R>) -> PaginationState {
    PaginationState::from_page(view.page, view.limit, response.count, response.results.len())
}

/// Rows loaded for another view must not stay on screen once the request
/// for `requested` has failed
pub fn rows_are_stale(shown: Option<&ViewState>, requested: &ViewState) -> bool {
    shown.is_some_and(|shown| shown != requested)
}

/// Fetches one page of `R` whenever the view state changes or the table key
/// is invalidated.
///
/// Out-of-order responses are dropped, and a response arriving after the
/// owning view was disposed is ignored.
pub fn use_table_data<R: ApiResource + Send + Sync>(view: Signal<ViewState>) -> TableData<R> {
    let api = use_api();
    let client = use_query_client();
    let key = QueryKey::table(R::ENDPOINT);
    client.register(&key);

    let data = TableData {
        rows: RwSignal::new(Vec::<R>::new()),
        is_loading: RwSignal::new(true),
        error: RwSignal::new(None),
        pagination: RwSignal::new(PaginationState::default()),
        key: key.clone(),
        client,
    };
    let seq = StoredValue::new(RequestSeq::default());
    let shown_view = StoredValue::new(None::<ViewState>);

    let (rows, is_loading, error, pagination) =
        (data.rows, data.is_loading, data.error, data.pagination);
    Effect::new(move |_| {
        let view = view.get();
        let generation = client.generation(&key);
        let Some(ticket) = seq.try_update_value(|s| s.next()) else {
            return;
        };
        log::debug!("fetch {} gen={} page={}", R::ENDPOINT, generation, view.page);
        is_loading.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = api.list::<R>(&view, client.retry).await;
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(response) => {
                    pagination.try_set(page_state(&view, &response));
                    rows.try_set(response.results);
                    error.try_set(None);
                    shown_view.try_set_value(Some(view));
                }
                Err(e) => {
                    log::warn!("list {} failed: {}", R::ENDPOINT, e);
                    let stale = shown_view
                        .try_with_value(|shown| rows_are_stale(shown.as_ref(), &view))
                        .unwrap_or(false);
                    if stale {
                        rows.try_set(Vec::new());
                        pagination.try_set(PaginationState::default());
                        shown_view.try_set_value(None);
                    }
                    error.try_set(Some(e));
                }
            }
            is_loading.try_set(false);
        });
    });

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::shared::pagination::PageSize;

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_page_state_without_count() {
        let view = ViewState {
            page: 3,
            limit: PageSize::Twenty,
            ..ViewState::default()
        };
        let response = ListResponse {
            results: vec![1, 2, 3],
            count: None,
        };
        let state = page_state(&view, &response);
        assert_eq!(state.page, 3);
        assert_eq!(state.total, 43);
    }

    #[test]
    fn test_failed_refetch_of_same_view_keeps_rows() {
        let view = ViewState {
            page: 2,
            ..ViewState::default()
        };
        assert!(!rows_are_stale(Some(&view.clone()), &view));
        assert!(!rows_are_stale(None, &view));
    }

    #[test]
    fn test_failed_fetch_under_new_filter_drops_rows() {
        let shown = ViewState {
            page: 3,
            ..ViewState::default()
        };
        let mut requested = shown.clone();
        requested.set_filter("branch", Some("2".to_string()));
        assert!(rows_are_stale(Some(&shown), &requested));

        let mut next_page = shown.clone();
        next_page.page = 4;
        assert!(rows_are_stale(Some(&shown), &next_page));
    }
}

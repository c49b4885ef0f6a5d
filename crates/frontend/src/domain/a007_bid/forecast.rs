//! Calculation step of a bid: locally edited lines and the server forecast.
//!
//! Results are tagged with the bid they were computed for. Navigating from
//! one bid to another never shows the previous bid's numbers.

use crate::shared::api::ApiError;
use crate::shared::crud::StateCell;
use crate::shared::i18n::Strings;
use crate::shared::notify::Notifier;
use crm_contracts::domain::a005_product::Product;
use crm_contracts::domain::a007_bid::{
    Bid, BidProduct, BidService, BidTotals, BidTransaction, ForecastRequest,
};
use crm_contracts::domain::common::Relation;
use std::future::Future;

/// Editable copy of the bid lines shown on the calculation tab
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineDraft {
    pub products: Vec<BidProduct>,
    pub services: Vec<BidService>,
}

impl LineDraft {
    pub fn from_bid(bid: &Bid) -> Self {
        Self {
            products: bid.products.clone(),
            services: bid.services.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.services.is_empty()
    }

    /// New line for `product` at its list price, quantity 1
    pub fn add_product(&mut self, product: &Product) {
        self.products.push(BidProduct {
            id: None,
            product: Relation::Inline(product.clone()),
            quality: product.quality.as_ref().map(Relation::to_reference),
            quantity: 1.0,
            price: product.price,
        });
    }

    /// Replaces the product of a line; price follows the new product
    pub fn set_product(&mut self, index: usize, product: &Product) {
        if let Some(line) = self.products.get_mut(index) {
            line.product = Relation::Inline(product.clone());
            line.price = product.price;
        }
    }

    pub fn set_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(line) = self.products.get_mut(index) {
            line.quantity = quantity.max(0.0);
        }
    }

    pub fn set_price(&mut self, index: usize, price: f64) {
        if let Some(line) = self.products.get_mut(index) {
            line.price = price.max(0.0);
        }
    }

    pub fn remove_product(&mut self, index: usize) {
        if index < self.products.len() {
            self.products.remove(index);
        }
    }

    pub fn add_service(&mut self) {
        self.services.push(BidService {
            id: None,
            name: String::new(),
            price: 0.0,
        });
    }

    pub fn set_service_name(&mut self, index: usize, name: String) {
        if let Some(line) = self.services.get_mut(index) {
            line.name = name;
        }
    }

    pub fn set_service_price(&mut self, index: usize, price: f64) {
        if let Some(line) = self.services.get_mut(index) {
            line.price = price.max(0.0);
        }
    }

    pub fn remove_service(&mut self, index: usize) {
        if index < self.services.len() {
            self.services.remove(index);
        }
    }

    pub fn estimate(&self, transactions: &[BidTransaction]) -> BidTotals {
        BidTotals::estimate(&self.products, &self.services, transactions)
    }

    pub fn request(&self) -> ForecastRequest {
        ForecastRequest::from_lines(&self.products, &self.services)
    }
}

/// Forecast result of the bid currently on screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastState {
    bid_id: Option<i64>,
    result: Option<Bid>,
    running: bool,
}

impl ForecastState {
    /// Scopes the state to `bid_id`; anything computed for another bid is dropped
    pub fn reset_for(&mut self, bid_id: i64) {
        if self.bid_id != Some(bid_id) {
            *self = Self {
                bid_id: Some(bid_id),
                ..Self::default()
            };
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn bid_id(&self) -> Option<i64> {
        self.bid_id
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// False while a forecast is already running or the bid changed
    pub fn begin(&mut self, bid_id: i64) -> bool {
        if self.running || self.bid_id != Some(bid_id) {
            return false;
        }
        self.running = true;
        true
    }

    /// Stores the result only if the view still shows `bid_id`
    pub fn finish(&mut self, bid_id: i64, result: Bid) -> bool {
        if self.bid_id != Some(bid_id) {
            return false;
        }
        self.running = false;
        self.result = Some(result);
        true
    }

    pub fn fail(&mut self, bid_id: i64) {
        if self.bid_id == Some(bid_id) {
            self.running = false;
        }
    }

    pub fn results_for(&self, bid_id: i64) -> Option<&Bid> {
        match self.bid_id {
            Some(id) if id == bid_id => self.result.as_ref(),
            _ => None,
        }
    }

    pub fn has_results_for(&self, bid_id: i64) -> bool {
        self.results_for(bid_id).is_some()
    }
}

/// Sends one forecast request for `bid_id` and settles the state.
///
/// Returns true when a result was stored for the bid still on screen.
pub async fn run_forecast<S, N, F, Fut>(
    state: &S,
    bid_id: i64,
    request: ForecastRequest,
    notifier: &N,
    strings: &Strings,
    send: F,
) -> bool
where
    S: StateCell<ForecastState>,
    N: Notifier,
    F: FnOnce(i64, ForecastRequest) -> Fut,
    Fut: Future<Output = Result<Bid, ApiError>>,
{
    if !state.update_state(|s| s.begin(bid_id)).unwrap_or(false) {
        return false;
    }

    match send(bid_id, request).await {
        Ok(result) => {
            let stored = state
                .update_state(|s| s.finish(bid_id, result))
                .unwrap_or(false);
            if stored {
                notifier.success(strings.forecast_done);
            } else {
                log::debug!("forecast for bid {} arrived after leaving it", bid_id);
            }
            stored
        }
        Err(e) => {
            log::warn!("forecast for bid {} failed: {}", bid_id, e);
            state.update_state(|s| s.fail(bid_id));
            notifier.error(e.user_message(strings.generic_error));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::test_support::{yield_now, RecordingNotifier};
    use crate::shared::i18n::Locale;
    use crate::shared::notify::ToastKind;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn bid(id: i64, total: f64) -> Bid {
        Bid {
            id,
            totals: BidTotals {
                total,
                ..BidTotals::default()
            },
            ..Bid::default()
        }
    }

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("P{}", id),
            price,
            ..Product::default()
        }
    }

    #[test]
    fn test_results_are_scoped_to_bid() {
        let mut state = ForecastState::default();
        state.reset_for(1);
        assert!(state.begin(1));
        assert!(state.finish(1, bid(1, 100.0)));
        assert_eq!(state.results_for(1).map(|b| b.totals.total), Some(100.0));
        assert_eq!(state.results_for(2), None);

        // same bid again keeps the result
        state.reset_for(1);
        assert!(state.has_results_for(1));

        state.reset_for(2);
        assert_eq!(state.results_for(1), None);
        assert_eq!(state.results_for(2), None);
        assert_eq!(state.bid_id(), Some(2));
    }

    #[test]
    fn test_late_result_for_previous_bid_is_dropped() {
        let mut state = ForecastState::default();
        state.reset_for(1);
        assert!(state.begin(1));
        state.reset_for(2);
        assert!(!state.finish(1, bid(1, 5.0)));
        assert_eq!(state.results_for(1), None);
        assert!(!state.is_running());
    }

    #[test]
    fn test_begin_requires_current_bid() {
        let mut state = ForecastState::default();
        assert!(!state.begin(3));
        state.reset_for(3);
        assert!(state.begin(3));
        assert!(!state.begin(3));
        state.fail(3);
        assert!(state.begin(3));
    }

    #[test]
    fn test_draft_lines_and_estimate() {
        let mut draft = LineDraft::default();
        assert!(draft.is_empty());
        draft.add_product(&product(4, 10.0));
        draft.set_quantity(0, 3.0);
        draft.add_product(&product(5, 7.0));
        draft.set_product(1, &product(6, 20.0));
        draft.set_quantity(7, 100.0);
        draft.add_service();
        draft.set_service_name(0, "Delivery".into());
        draft.set_service_price(0, -5.0);
        draft.set_service_price(0, 15.0);

        let totals = draft.estimate(&[]);
        assert_eq!(totals.products, 50.0);
        assert_eq!(totals.services, 15.0);
        assert_eq!(totals.balance, 65.0);

        let json = serde_json::to_value(draft.request()).unwrap();
        assert_eq!(json["products"][1]["product"], serde_json::json!(6));
        assert_eq!(json["services"][0]["name"], "Delivery");

        draft.remove_product(0);
        draft.remove_service(3);
        assert_eq!(draft.products.len(), 1);
        assert_eq!(draft.services.len(), 1);
    }

    #[test]
    fn test_run_forecast_sends_once_for_double_click() {
        let state = RefCell::new(ForecastState::default());
        state.borrow_mut().reset_for(8);
        let notifier = RecordingNotifier::default();
        let strings = Locale::En.strings();
        let calls = Cell::new(0);

        let send = |id: i64, _req: ForecastRequest| {
            calls.set(calls.get() + 1);
            async move {
                yield_now().await;
                Ok(bid(id, 42.0))
            }
        };
        let (first, second) = block_on(futures::future::join(
            run_forecast(&state, 8, LineDraft::default().request(), &notifier, strings, send),
            run_forecast(&state, 8, LineDraft::default().request(), &notifier, strings, send),
        ));

        assert!(first);
        assert!(!second);
        assert_eq!(calls.get(), 1);
        assert_eq!(state.borrow().results_for(8).map(|b| b.totals.total), Some(42.0));
        assert_eq!(notifier.kinds(), vec![ToastKind::Success]);
    }

    #[test]
    fn test_failed_forecast_keeps_results_tab_locked() {
        let state = RefCell::new(ForecastState::default());
        state.borrow_mut().reset_for(8);
        let notifier = RecordingNotifier::default();
        let strings = Locale::En.strings();

        let ok = block_on(run_forecast(
            &state,
            8,
            LineDraft::default().request(),
            &notifier,
            strings,
            |_, _| async {
                Err(ApiError::Server {
                    status: 500,
                    message: None,
                })
            },
        ));

        assert!(!ok);
        assert!(!state.borrow().has_results_for(8));
        assert!(!state.borrow().is_running());
        assert_eq!(notifier.last_message().as_deref(), Some(strings.generic_error));
    }
}

//! Typed pub/sub for cross-cutting signals.
//!
//! Owned by the application shell and provided once through context. Only
//! the routing layer subscribes; everything else publishes.

use leptos::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The server rejected the session token
    Unauthorized,
    /// A full-page load found nothing at `path`
    NotFound { path: String },
    /// A full-page load failed on the server side
    ServerError { message: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Subscribers<E> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<E>)>,
}

pub struct EventBus<E> {
    inner: Arc<Mutex<Subscribers<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Subscribers {
                next_id: 1,
                handlers: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&E) + Send + Sync + 'static) -> SubscriptionId {
        let mut subs = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        let id = SubscriptionId(subs.next_id);
        subs.next_id += 1;
        subs.handlers.push((id, Arc::new(handler)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        subs.handlers.retain(|(sid, _)| *sid != id);
    }

    /// Handlers run outside the lock, so they may publish or unsubscribe.
    /// Returns the number of handlers notified.
    pub fn publish(&self, event: &E) -> usize {
        let handlers: Vec<Handler<E>> = {
            let subs = self.inner.lock().unwrap_or_else(|p| p.into_inner());
            subs.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .handlers
            .len()
    }
}

pub type AppEventBus = EventBus<AppEvent>;

impl AppEventBus {
    pub fn emit(&self, event: AppEvent) {
        let notified = self.publish(&event);
        log::debug!("event {:?} -> {} subscriber(s)", event, notified);
    }
}

pub fn use_event_bus() -> AppEventBus {
    use_context::<AppEventBus>().expect("AppEventBus not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_subscribers_until_unsubscribed() {
        let bus = AppEventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let id = bus.subscribe(move |event| {
            if *event == AppEvent::Unauthorized {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(bus.publish(&AppEvent::Unauthorized), 1);
        bus.publish(&AppEvent::NotFound { path: "/x".into() });
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        bus.unsubscribe(id);
        assert_eq!(bus.publish(&AppEvent::Unauthorized), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_may_publish_reentrantly() {
        let bus = AppEventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let inner_bus = bus.clone();
        let log = Arc::clone(&seen);
        bus.subscribe(move |event| {
            log.lock().unwrap().push(event.clone());
            if let AppEvent::ServerError { .. } = event {
                inner_bus.publish(&AppEvent::NotFound { path: "/500".into() });
            }
        });

        bus.publish(&AppEvent::ServerError { message: None });
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}

use super::StateCell;
use crate::shared::notify::{Notifier, ToastKind};
use crate::shared::query::{CacheInvalidator, QueryKey};
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

impl<T> StateCell<T> for RefCell<T> {
    fn update_state<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_state<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
        Some(f(&self.borrow()))
    }
}

#[derive(Default)]
pub struct RecordingInvalidator {
    pub keys: RefCell<Vec<QueryKey>>,
}

impl CacheInvalidator for RecordingInvalidator {
    fn invalidate(&self, key: &QueryKey) {
        self.keys.borrow_mut().push(key.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<ToastKind> {
        self.toasts.borrow().iter().map(|(k, _)| *k).collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.toasts.borrow().last().map(|(_, m)| m.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: String) {
        self.toasts.borrow_mut().push((kind, message));
    }
}

/// Pending once, then ready: lets a second future run while the first is "in flight"
pub struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn yield_now() -> YieldNow {
    YieldNow(false)
}

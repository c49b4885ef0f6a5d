//! Delete confirmation: explicit confirm click, one request, then settle.

use super::StateCell;
use crate::shared::api::ApiError;
use crate::shared::i18n::Strings;
use crate::shared::notify::Notifier;
use crate::shared::query::{CacheInvalidator, QueryKey};
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Closed,
    Confirming(DeleteTarget),
    Deleting(DeleteTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteDialog {
    pub phase: DeletePhase,
}

impl DeleteDialog {
    pub fn open(&mut self, target: DeleteTarget) {
        if !self.is_busy() {
            self.phase = DeletePhase::Confirming(target);
        }
    }

    /// The confirm click. Only the first click of a round gets the target;
    /// clicks while the request is in flight get `None`.
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        match std::mem::take(&mut self.phase) {
            DeletePhase::Confirming(target) => {
                self.phase = DeletePhase::Deleting(target.clone());
                Some(target)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    pub fn succeeded(&mut self) {
        self.phase = DeletePhase::Closed;
    }

    /// Back to confirming so the user can retry or cancel
    pub fn failed(&mut self) {
        if let DeletePhase::Deleting(target) = std::mem::take(&mut self.phase) {
            self.phase = DeletePhase::Confirming(target);
        }
    }

    pub fn cancel(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = DeletePhase::Closed;
        true
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, DeletePhase::Deleting(_))
    }

    pub fn is_open(&self) -> bool {
        self.phase != DeletePhase::Closed
    }
}

/// Handles one confirm click. Returns true when the record was deleted.
pub async fn confirm_delete<S, I, N, F, Fut>(
    state: &S,
    list_key: &QueryKey,
    invalidator: &I,
    notifier: &N,
    strings: &Strings,
    delete: F,
) -> bool
where
    S: StateCell<DeleteDialog>,
    I: CacheInvalidator,
    N: Notifier,
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(target) = state.update_state(|d| d.confirm()).flatten() else {
        return false;
    };

    match delete(target.id).await {
        Ok(()) => {
            log::debug!("deleted {} from {}", target.id, list_key);
            invalidator.invalidate_written(list_key);
            notifier.success(strings.deleted_success);
            state.update_state(|d| d.succeeded());
            true
        }
        Err(e) => {
            log::warn!("delete of {} failed: {}", target.id, e);
            notifier.error(e.user_message(strings.generic_error));
            state.update_state(|d| d.failed());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::test_support::{yield_now, RecordingInvalidator, RecordingNotifier};
    use crate::shared::i18n::Locale;
    use crate::shared::notify::ToastKind;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn target() -> DeleteTarget {
        DeleteTarget {
            id: 7,
            label: "Chilonzor".to_string(),
        }
    }

    fn confirming() -> RefCell<DeleteDialog> {
        let mut dialog = DeleteDialog::default();
        dialog.open(target());
        RefCell::new(dialog)
    }

    #[test]
    fn test_second_click_while_deleting_is_ignored() {
        let dialog = confirming();
        let invalidator = RecordingInvalidator::default();
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/branches/");
        let strings = Locale::En.strings();
        let calls = Cell::new(0);

        let delete = |id: i64| {
            calls.set(calls.get() + 1);
            assert_eq!(id, 7);
            async {
                yield_now().await;
                Ok(())
            }
        };

        let first = confirm_delete(&dialog, &key, &invalidator, &notifier, strings, delete);
        let second = confirm_delete(&dialog, &key, &invalidator, &notifier, strings, delete);
        let (a, b) = block_on(futures::future::join(first, second));

        assert!(a);
        assert!(!b);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            *invalidator.keys.borrow(),
            vec![key.clone(), QueryKey::options("/branches/")]
        );
        assert_eq!(notifier.kinds(), vec![ToastKind::Success]);
        assert!(!dialog.borrow().is_open());
    }

    #[test]
    fn test_server_error_keeps_dialog_open_without_invalidation() {
        let dialog = confirming();
        let invalidator = RecordingInvalidator::default();
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/branches/");

        let deleted = block_on(confirm_delete(
            &dialog,
            &key,
            &invalidator,
            &notifier,
            Locale::En.strings(),
            |_| async { Err(ApiError::from_status(500, "<html>Internal Server Error</html>")) },
        ));

        assert!(!deleted);
        assert!(invalidator.keys.borrow().is_empty());
        assert_eq!(notifier.kinds(), vec![ToastKind::Error]);
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Something went wrong. Please try again.")
        );
        assert_eq!(dialog.borrow().phase, DeletePhase::Confirming(target()));
    }

    #[test]
    fn test_server_message_is_shown() {
        let dialog = confirming();
        let notifier = RecordingNotifier::default();

        block_on(confirm_delete(
            &dialog,
            &QueryKey::table("/branches/"),
            &RecordingInvalidator::default(),
            &notifier,
            Locale::En.strings(),
            |_| async {
                Err(ApiError::from_status(400, r#"{"detail": "Branch has customers"}"#))
            },
        ));

        assert_eq!(notifier.last_message().as_deref(), Some("Branch has customers"));
    }

    #[test]
    fn test_confirm_requires_open_dialog() {
        let mut dialog = DeleteDialog::default();
        assert_eq!(dialog.confirm(), None);

        dialog.open(target());
        assert_eq!(dialog.confirm(), Some(target()));
        assert!(!dialog.cancel());
        dialog.failed();
        assert!(dialog.cancel());
        assert!(!dialog.is_open());
    }
}

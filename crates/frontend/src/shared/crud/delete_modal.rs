use super::delete::{confirm_delete, DeleteDialog, DeletePhase, DeleteTarget};
use super::form_modal::CrudServices;
use super::AdminResource;
use crate::shared::i18n::fill_one;
use crate::shared::modal_stack::ModalOptions;
use crate::shared::query::QueryKey;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

/// Asks for confirmation before deleting `target`
pub fn open_delete_modal<R: AdminResource>(
    svc: CrudServices,
    dialog: RwSignal<DeleteDialog>,
    target: DeleteTarget,
) {
    dialog.update(|d| d.open(target));

    let options = ModalOptions {
        modal_class: Some("modal--confirm".to_string()),
        can_close: Some(Arc::new(move || !dialog.with_untracked(DeleteDialog::is_busy))),
        on_close: Some(Arc::new(move || {
            dialog.try_update(|d| {
                d.cancel();
            });
        })),
    };
    let stack = svc.stack;
    stack.push_with(options, move |handle| {
        let svc = svc.clone();
        let strings = svc.strings;
        let busy = Signal::derive(move || dialog.with(DeleteDialog::is_busy));

        let on_cancel = move |_| {
            if dialog.try_update(DeleteDialog::cancel).unwrap_or(true) {
                handle.close();
            }
        };

        let on_confirm = move |_| {
            let svc = svc.clone();
            spawn_local(async move {
                let key = QueryKey::table(R::ENDPOINT);
                let api = svc.api.clone();
                let deleted = confirm_delete(
                    &dialog,
                    &key,
                    &svc.client,
                    &svc.notifier,
                    svc.strings.get_untracked(),
                    |id| async move { api.delete::<R>(id).await },
                )
                .await;
                if deleted {
                    handle.close();
                }
            });
        };

        let label = move || match dialog.with(|d| d.phase.clone()) {
            DeletePhase::Confirming(t) | DeletePhase::Deleting(t) => t.label,
            DeletePhase::Closed => String::new(),
        };

        view! {
            <div class="confirm-dialog">
                <h3 class="modal-title">{move || strings.get().confirm_delete_title}</h3>
                <p class="confirm-dialog__target">{label}</p>
                <p class="confirm-dialog__text">{move || strings.get().confirm_delete_text}</p>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_cancel disabled=busy>
                        {move || strings.get().cancel}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_confirm disabled=busy>
                        {move || {
                            let s = strings.get();
                            if busy.get() { s.deleting } else { s.delete }
                        }}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}

/// `Chilonzor (#4)`
pub fn target_label(label: &str, id: i64) -> String {
    if label.trim().is_empty() {
        fill_one("#{}", id)
    } else {
        format!("{} (#{})", label.trim(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_label() {
        assert_eq!(target_label("Chilonzor", 4), "Chilonzor (#4)");
        assert_eq!(target_label(" ", 4), "#4");
    }
}

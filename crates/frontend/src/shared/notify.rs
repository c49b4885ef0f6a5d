//! Transient notifications (toasts).
//!
//! A single [`NotificationService`] is created in `App` and provided through
//! context for the app's lifetime. Non-component code receives it as a
//! [`Notifier`] argument instead of reaching for a global.

use leptos::prelude::*;
use thaw::*;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: String);

    fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::debug!("toast: {}", message),
        }
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notifier() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack. Mounted once, next to `ModalHost`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_notifier();
    let toasts = service.toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let intent = match toast.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                        ToastKind::Info => MessageBarIntent::Info,
                    };
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <MessageBar intent=intent>
                                <span class="toast__text">{toast.message.clone()}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| service.dismiss(id)
                                >
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

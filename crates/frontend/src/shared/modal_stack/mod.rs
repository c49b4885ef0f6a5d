//! Stack of modal dialogs rendered by a single [`ModalHost`].
//!
//! CRUD forms and delete confirmations are pushed here instead of being
//! mounted inside list pages, so a form can open a confirmation on top of
//! itself and Escape always closes the topmost entry only.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
pub type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;
pub type CloseHook = Arc<dyn Fn() + Send + Sync>;

/// Surface class, close guard and close hook of a pushed modal
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub modal_class: Option<String>,
    /// While it returns false, overlay click and Escape are ignored
    pub can_close: Option<CloseGuard>,
    /// Runs once the entry leaves the stack, whatever removed it
    pub on_close: Option<CloseHook>,
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    options: ModalOptions,
}

impl ModalEntry {
    fn may_close(&self) -> bool {
        self.options.can_close.as_ref().map(|f| f()).unwrap_or(true)
    }
}

/// Takes the entries matching `pred` out of the stack, keeping the order of the rest
fn take_where(stack: &mut Vec<ModalEntry>, pred: impl Fn(&ModalEntry) -> bool) -> Vec<ModalEntry> {
    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(stack).into_iter().partition(|e| pred(e));
    *stack = kept;
    removed
}

fn run_close_hooks(removed: Vec<ModalEntry>) {
    for entry in removed {
        log::debug!("modal {} closed", entry.id);
        if let Some(hook) = entry.options.on_close {
            hook();
        }
    }
}

/// Lets the modal content close itself
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    // Removing the overlay inside its own click dispatch drops the handler
    // that is still running, so every close waits one tick.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.stack.with(|s| s.len())
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with(ModalOptions::default(), builder)
    }

    pub fn push_with<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                options,
            })
        });
        log::debug!("modal {} opened", id);

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        let removed = self
            .stack
            .try_update(|s| take_where(s, |e| e.id == id))
            .unwrap_or_default();
        run_close_hooks(removed);
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    /// Closes the topmost modal unless its guard refuses
    pub fn pop_guarded(&self) {
        let allowed = self
            .stack
            .with_untracked(|s| s.last().map(ModalEntry::may_close).unwrap_or(false));
        if allowed {
            self.defer(|svc| {
                let removed = svc
                    .stack
                    .try_update(|s| s.pop().into_iter().collect::<Vec<_>>())
                    .unwrap_or_default();
                run_close_hooks(removed);
            });
        }
    }

    pub fn clear(&self) {
        let removed = self
            .stack
            .try_update(|s| take_where(s, |_| true))
            .unwrap_or_default();
        run_close_hooks(removed);
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided in context")
}

/// Renders the modal stack. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.pop_guarded();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // host lives as long as the app
            closure.forget();
        }
    });

    let entries = move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>();
    let entry_key = |pair: &(usize, ModalEntry)| pair.1.id;
    let render_entry = move |pair: (usize, ModalEntry)| {
        let (idx, entry) = pair;
        let z_index = 1000 + idx as i32;
        let on_close = {
            let entry = entry.clone();
            Callback::new(move |_| {
                if entry.may_close() {
                    svc.close_deferred(entry.id);
                }
            })
        };
        let content = (entry.builder)(ModalHandle { id: entry.id, svc });
        let modal_class = entry.options.modal_class.clone().unwrap_or_default();

        view! {
            <ModalFrame z_index=z_index on_close=on_close modal_class=modal_class>
                {content}
            </ModalFrame>
        }
    };

    view! {
        <Show when=move || svc.is_open()>
            <For each=entries key=entry_key children=render_entry />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn entry(id: u64, closed: &Arc<AtomicUsize>) -> ModalEntry {
        let closed = Arc::clone(closed);
        ModalEntry {
            id,
            builder: Arc::new(|_| ().into_any()),
            options: ModalOptions {
                on_close: Some(Arc::new(move || {
                    closed.fetch_add(1, Ordering::SeqCst);
                })),
                ..ModalOptions::default()
            },
        }
    }

    #[test]
    fn test_closing_one_entry_runs_only_its_hook() {
        let closed = Arc::new(AtomicUsize::new(0));
        let mut stack = vec![entry(1, &closed), entry(2, &closed), entry(3, &closed)];

        let removed = take_where(&mut stack, |e| e.id == 2);
        run_close_hooks(removed);

        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(stack.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_clearing_runs_every_hook() {
        let closed = Arc::new(AtomicUsize::new(0));
        let mut stack = vec![entry(1, &closed), entry(2, &closed)];

        run_close_hooks(take_where(&mut stack, |_| true));

        assert!(stack.is_empty());
        assert_eq!(closed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_guard_blocks_close() {
        let mut e = entry(1, &Arc::new(AtomicUsize::new(0)));
        assert!(e.may_close());
        e.options.can_close = Some(Arc::new(|| false));
        assert!(!e.may_close());
    }
}

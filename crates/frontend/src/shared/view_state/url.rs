use super::ViewState;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// URL-backed [`ViewState`] of the current route.
///
/// `state` is re-derived from `location.search` on every navigation, so
/// reload, sharing a link and back/forward all restore the same view.
/// Writes go through the router; the component never keeps its own copy.
#[derive(Clone, Copy)]
pub struct UrlViewState {
    pub state: Memo<ViewState>,
    pending: RwSignal<Option<ViewState>>,
}

impl UrlViewState {
    /// Apply `f` to the current state and push the result to the URL
    pub fn update(&self, f: impl FnOnce(&mut ViewState)) {
        let mut next = self.state.get_untracked();
        f(&mut next);
        if next != self.state.get_untracked() {
            self.pending.set(Some(next));
        }
    }

    pub fn set_page(&self, page: u32) {
        self.update(|s| s.set_page(page));
    }

    pub fn set_filter(&self, key: &str, value: Option<String>) {
        self.update(|s| s.set_filter(key, value));
    }

    pub fn set_tab(&self, tab: &str) {
        self.update(|s| s.set_tab(Some(tab)));
    }
}

/// Must be called inside a routed component
pub fn use_url_view_state() -> UrlViewState {
    let location = use_location();
    let navigate = use_navigate();

    let search = location.search;
    let state = Memo::new(move |_| ViewState::from_query(&search.get()));
    let pending = RwSignal::new(None::<ViewState>);

    let pathname = location.pathname;
    Effect::new(move |_| {
        let Some(next) = pending.get() else {
            return;
        };
        let url = format!("{}?{}", pathname.get_untracked(), next.to_query());
        log::debug!("view state -> {}", url);
        navigate(
            &url,
            NavigateOptions {
                scroll: true,
                ..Default::default()
            },
        );
        scroll_to_top();
        pending.set(None);
    });

    UrlViewState { state, pending }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Navigation usable from `Send + Sync` handlers such as `Callback`s.
/// The path goes through a signal to an effect that owns the navigator.
pub fn use_deferred_navigate() -> Callback<String> {
    let navigate = use_navigate();
    let pending = RwSignal::new(None::<String>);
    Effect::new(move |_| {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    Callback::new(move |path: String| pending.set(Some(path)))
}

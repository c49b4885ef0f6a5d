pub mod global_context;
pub mod sidebar;
pub mod top_header;

use crate::shared::api::use_api;
use crate::shared::components::LoadingState;
use crate::shared::config::use_app_config;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::query::use_query_client;
use crate::system::auth::context::use_auth;
use crate::system::settings::load_into_config;
use global_context::use_global_context;
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Authenticated application shell.
///
/// ```text
/// +-----------------------------------+
/// |             TopHeader             |
/// +---------+-------------------------+
/// | Sidebar |   routed page (Outlet)  |
/// +---------+-------------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();
    let stack = use_modal_stack();
    let location = use_location();

    // modals belong to the page that opened them
    Effect::new(move |prev: Option<String>| {
        let pathname = location.pathname.get();
        if prev.is_some_and(|p| p != pathname) {
            stack.clear();
        }
        pathname
    });

    // organization settings, once per session
    let config = use_app_config();
    let api = use_api();
    let retry = use_query_client().retry;
    Effect::new(move |loaded: Option<bool>| {
        let (authenticated, restoring) = auth_state.with(|a| (a.is_authenticated(), a.restoring));
        if !authenticated {
            return false;
        }
        let loaded = loaded.unwrap_or(false);
        if !restoring && !loaded {
            load_into_config(api.clone(), config, retry);
            return true;
        }
        loaded
    });

    let signed_out = move || auth_state.with(|a| !a.is_authenticated());
    let restoring = move || auth_state.with(|a| a.restoring);

    view! {
        <Show when=move || !signed_out() fallback=|| view! { <Redirect path="/login" /> }>
            <div class="app-layout">
                <TopHeader />
                <div class="app-body" class:app-body--collapsed=move || ctx.sidebar_collapsed.get()>
                    <Sidebar />
                    <main class="app-main">
                        <Show when=move || !restoring() fallback=|| view! { <LoadingState /> }>
                            <Outlet />
                        </Show>
                    </main>
                </div>
            </div>
        </Show>
    }
}

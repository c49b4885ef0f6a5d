//! Top bar: sidebar toggle, title, language, user and logout

use crate::layout::global_context::use_global_context;
use crate::shared::api::use_api;
use crate::shared::config::use_app_config;
use crate::shared::i18n::{use_strings, Locale};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let strings = use_strings();
    let config = use_app_config();
    let api = use_api();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            do_logout(&api, set_auth_state).await;
        });
    };

    let title = move || {
        let company = config.with(|c| c.organization.company_name.clone());
        if company.trim().is_empty() {
            strings.get().app_title.to_string()
        } else {
            company
        }
    };

    let user_name = move || {
        auth_state.with(|a| {
            a.user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title=move || strings.get().toggle_sidebar
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <label class="top-header__locale" title=move || strings.get().language>
                    {icon("globe")}
                    <select
                        class="top-header__select"
                        prop:value=move || ctx.locale.get().code()
                        on:change=move |ev| {
                            if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                                ctx.set_locale(locale);
                            }
                        }
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|l| view! {
                                <option value=l.code() selected=move || ctx.locale.get() == l>
                                    {l.native_name()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="top-header__user">
                    <span>{user_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title=move || strings.get().logout>
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}

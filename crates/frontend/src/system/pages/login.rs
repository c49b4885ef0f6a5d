use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::api::{use_api, ApiError};
use crate::shared::i18n::{use_strings, Strings};
use crate::system::auth::context::{do_login, use_auth};

pub const HOME_PATH: &str = "/bids";

/// Text shown under the form for a failed sign-in
fn login_error(error: &ApiError, strings: &Strings) -> String {
    match error {
        ApiError::Unauthorized | ApiError::Validation { .. } => strings.login_failed.to_string(),
        other => other.user_message(strings.generic_error),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let strings = use_strings();
    let api = use_api();

    // signed in (here or restored) -> leave the login screen
    let navigate = use_navigate();
    Effect::new(move |_| {
        if auth_state.with(|s| s.is_authenticated() && !s.restoring) {
            navigate(HOME_PATH, Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some(strings.get_untracked().required.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = do_login(&api, set_auth_state, username_val, password_val).await {
                log::warn!("login failed: {}", e);
                set_error_message.try_set(Some(login_error(&e, strings.get_untracked())));
            }
            set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{move || strings.get().app_title}</h1>
                <h2>{move || strings.get().login_title}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">{move || strings.get().username}</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || strings.get().password}</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || {
                            let s = strings.get();
                            if is_loading.get() { s.signing_in } else { s.sign_in }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_login_error_text() {
        let s = Locale::En.strings();
        assert_eq!(login_error(&ApiError::Unauthorized, s), s.login_failed);
        assert_eq!(
            login_error(&ApiError::Network("offline".into()), s),
            s.generic_error
        );
    }
}

use crate::shared::api::{use_api, ApiClient, ApiError};
use crm_contracts::system::auth::{Role, Section, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
    /// Stored token found at startup, `/auth/me/` not answered yet
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Role of the signed-in user. Unknown users get the narrowest role;
    /// the server enforces permissions either way.
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }

    pub fn can_access(&self, section: Section) -> bool {
        self.is_authenticated() && self.role().can_access(section)
    }

    pub fn can_delete(&self) -> bool {
        self.is_authenticated() && self.role().can_delete()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let token = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: token.clone(),
        user: None,
        restoring: token.is_some(),
    });
    let api = use_api();

    // Restore the session found in the cookie / localStorage
    Effect::new(move |_| {
        if token.is_none() {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            restore_session(&api, set_auth_state).await;
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

async fn restore_session(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    let refresh = storage::get_refresh_token();

    match api::get_current_user(api).await {
        Ok(user) => {
            log::debug!("session restored for {}", user.username);
            set_auth_state.update(|s| {
                s.user = Some(user);
                s.restoring = false;
            });
        }
        Err(ApiError::Unauthorized) => match refresh {
            Some(refresh) => match refresh_session(api, refresh).await {
                Ok(state) => set_auth_state.set(state),
                Err(e) => {
                    log::warn!("session refresh failed: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            },
            None => {
                storage::clear_tokens();
                set_auth_state.set(AuthState::default());
            }
        },
        Err(e) => {
            // keep the token, the server may be back shortly
            log::warn!("session restore failed: {}", e);
            set_auth_state.update(|s| s.restoring = false);
        }
    }
}

async fn refresh_session(api: &ApiClient, refresh: String) -> Result<AuthState, ApiError> {
    let response = api::refresh_token(api, refresh.clone()).await?;
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&refresh);
    let user = api::get_current_user(api).await?;
    Ok(AuthState {
        access_token: Some(response.access_token),
        user: Some(user),
        restoring: false,
    })
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(api, username, password).await?;

    storage::save_access_token(&response.access_token);
    if let Some(refresh) = &response.refresh_token {
        storage::save_refresh_token(refresh);
    }
    log::debug!("signed in as {}", response.user.username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user: Some(response.user),
        restoring: false,
    });
    Ok(())
}

/// Helper: Perform logout. Local state is cleared even if the server call fails.
pub async fn do_logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(api, refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    end_session(set_auth_state);
}

/// Drops tokens and user without a server round-trip (401 from any request)
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.try_set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 1,
            username: "aziz".into(),
            full_name: None,
            role,
        }
    }

    #[test]
    fn test_access_requires_token() {
        let state = AuthState {
            access_token: None,
            user: Some(user(Role::Admin)),
            restoring: false,
        };
        assert!(!state.can_access(Section::Bids));
        assert!(!state.can_delete());
    }

    #[test]
    fn test_unknown_user_gets_operator_rights() {
        let state = AuthState {
            access_token: Some("t".into()),
            user: None,
            restoring: false,
        };
        assert!(state.can_access(Section::Customers));
        assert!(!state.can_access(Section::Catalog));
        assert!(!state.can_delete());

        let manager = AuthState {
            user: Some(user(Role::Manager)),
            ..state
        };
        assert!(manager.can_access(Section::Catalog));
        assert!(!manager.can_access(Section::Settings));
        assert!(manager.can_delete());
    }
}

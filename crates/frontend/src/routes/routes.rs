use crate::domain::a001_branch::ui::list::BranchList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_quality::ui::list::QualityList;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_factory_status::ui::list::FactoryStatusList;
use crate::domain::a007_bid::ui::details::BidDetails;
use crate::domain::a007_bid::ui::list::BidList;
use crate::layout::MainLayout;
use crate::shared::events::{use_event_bus, AppEvent};
use crate::shared::i18n::use_strings;
use crate::shared::modal_stack::ModalHost;
use crate::shared::notify::{use_notifier, Notifier, ToastHost, ToastKind};
use crate::system::auth::context::{end_session, use_auth, AuthState};
use crate::system::auth::guard::RequireRole;
use crate::system::pages::full_page::{NotFoundPage, ServerErrorDetail, ServerErrorPage};
use crate::system::pages::login::{LoginPage, HOME_PATH};
use crate::system::settings::page::SettingsPage;
use crm_contracts::system::auth::Section;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;
use leptos_router::NavigateOptions;

pub const LOGIN_PATH: &str = "/login";
pub const NOT_FOUND_PATH: &str = "/404";
pub const SERVER_ERROR_PATH: &str = "/500";

/// Where a cross-cutting event sends the user
pub fn event_target(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::Unauthorized => LOGIN_PATH,
        AppEvent::NotFound { .. } => NOT_FOUND_PATH,
        AppEvent::ServerError { .. } => SERVER_ERROR_PATH,
    }
}

/// How a 401 from any request affects the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// Startup restore is running and settles the session itself
    Ignore,
    /// No live session, e.g. a rejected sign-in
    EndSilently,
    Expire,
}

pub fn unauthorized_action(auth: &AuthState) -> UnauthorizedAction {
    if auth.restoring {
        UnauthorizedAction::Ignore
    } else if auth.is_authenticated() {
        UnauthorizedAction::Expire
    } else {
        UnauthorizedAction::EndSilently
    }
}

/// Turns bus events into navigation. The bus handler only stores the event;
/// the effect below owns the navigator.
#[component]
fn EventRedirects() -> impl IntoView {
    let bus = use_event_bus();
    let (auth_state, set_auth_state) = use_auth();
    let notifier = use_notifier();
    let strings = use_strings();
    let detail = use_context::<ServerErrorDetail>().unwrap_or_default();
    let navigate = use_navigate();

    let pending = RwSignal::new(None::<AppEvent>);
    let subscription = bus.subscribe(move |event: &AppEvent| {
        pending.try_set(Some(event.clone()));
    });
    on_cleanup({
        let bus = bus.clone();
        move || bus.unsubscribe(subscription)
    });

    Effect::new(move |_| {
        let Some(event) = pending.get() else {
            return;
        };
        pending.set(None);
        match &event {
            AppEvent::Unauthorized => match auth_state.with_untracked(unauthorized_action) {
                UnauthorizedAction::Ignore => {
                    log::debug!("401 during session restore");
                    return;
                }
                UnauthorizedAction::EndSilently => end_session(set_auth_state),
                UnauthorizedAction::Expire => {
                    log::info!("session rejected by server");
                    end_session(set_auth_state);
                    notifier.notify(ToastKind::Info, strings.get_untracked().session_expired.to_string());
                }
            },
            AppEvent::NotFound { path } => log::info!("not found: {}", path),
            AppEvent::ServerError { message } => {
                log::warn!("server error page: {:?}", message);
                detail.0.set(message.clone());
            }
        }
        navigate(event_target(&event), NavigateOptions::default());
    });
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <EventRedirects />
            <ModalHost />
            <ToastHost />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/404") view=NotFoundPage />
                <Route path=path!("/500") view=ServerErrorPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("bids") view=BidList />
                    <Route
                        path=path!("bids/:id")
                        view=|| view! {
                            <RequireRole section=Section::Bids>
                                <BidDetails />
                            </RequireRole>
                        }
                    />
                    <Route path=path!("customers") view=CustomerList />
                    <Route path=path!("branches") view=BranchList />
                    <Route path=path!("categories") view=CategoryList />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("qualities") view=QualityList />
                    <Route path=path!("factory-statuses") view=FactoryStatusList />
                    <Route
                        path=path!("settings")
                        view=|| view! {
                            <RequireRole section=Section::Settings>
                                <SettingsPage />
                            </RequireRole>
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_target() {
        assert_eq!(event_target(&AppEvent::Unauthorized), "/login");
        assert_eq!(
            event_target(&AppEvent::NotFound {
                path: "/bids/9".into()
            }),
            "/404"
        );
        assert_eq!(event_target(&AppEvent::ServerError { message: None }), "/500");
    }

    #[test]
    fn test_401_during_restore_keeps_session() {
        let restoring = AuthState {
            access_token: Some("expired".into()),
            user: None,
            restoring: true,
        };
        assert_eq!(unauthorized_action(&restoring), UnauthorizedAction::Ignore);

        let live = AuthState {
            restoring: false,
            ..restoring
        };
        assert_eq!(unauthorized_action(&live), UnauthorizedAction::Expire);
        assert_eq!(
            unauthorized_action(&AuthState::default()),
            UnauthorizedAction::EndSilently
        );
    }
}

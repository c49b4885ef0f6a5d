use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::events::AppEventBus;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotificationService;
use crate::shared::query::QueryClient;
use crate::system::auth::context::AuthProvider;
use crate::system::pages::full_page::ServerErrorDetail;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    log::info!("api base: {}", config.api_base);

    let events = AppEventBus::new();
    provide_context(ApiClient::new(config.api_base.clone(), events.clone()));
    provide_context(events);
    provide_context(RwSignal::new(config));

    let global = AppGlobalContext::new();
    global.init_persistence();
    provide_context(global);

    provide_context(QueryClient::new());
    provide_context(NotificationService::new());
    provide_context(ModalStackService::new());
    provide_context(ServerErrorDetail::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

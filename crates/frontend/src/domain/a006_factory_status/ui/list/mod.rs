use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a006_factory_status::FactoryStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn FactoryStatusList() -> impl IntoView {
    view! {
        <RequireRole section=FactoryStatus::SECTION>
            {resource_list_page::<FactoryStatus>()}
        </RequireRole>
    }
}

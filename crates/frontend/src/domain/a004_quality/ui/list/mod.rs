use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a004_quality::Quality;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn QualityList() -> impl IntoView {
    view! {
        <RequireRole section=Quality::SECTION>
            {resource_list_page::<Quality>()}
        </RequireRole>
    }
}

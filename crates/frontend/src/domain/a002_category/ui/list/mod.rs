use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a002_category::Category;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    view! {
        <RequireRole section=Category::SECTION>
            {resource_list_page::<Category>()}
        </RequireRole>
    }
}

use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a005_product::Product;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    view! {
        <RequireRole section=Product::SECTION>
            {resource_list_page::<Product>()}
        </RequireRole>
    }
}

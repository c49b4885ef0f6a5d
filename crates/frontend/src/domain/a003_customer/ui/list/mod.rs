use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a003_customer::Customer;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    view! {
        <RequireRole section=Customer::SECTION>
            {resource_list_page::<Customer>()}
        </RequireRole>
    }
}

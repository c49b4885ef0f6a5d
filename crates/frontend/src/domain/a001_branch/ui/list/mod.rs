use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a001_branch::Branch;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BranchList() -> impl IntoView {
    view! {
        <RequireRole section=Branch::SECTION>
            {resource_list_page::<Branch>()}
        </RequireRole>
    }
}

use crate::shared::crud::list_page::resource_list_page;
use crate::shared::crud::AdminResource;
use crate::system::auth::guard::RequireRole;
use crm_contracts::domain::a007_bid::Bid;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BidList() -> impl IntoView {
    view! {
        <RequireRole section=Bid::SECTION>
            {resource_list_page::<Bid>()}
        </RequireRole>
    }
}

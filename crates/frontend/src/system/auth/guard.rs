use crate::shared::components::LoadingState;
use crate::shared::i18n::use_strings;
use crate::shared::icons::icon_sized;
use crm_contracts::system::auth::Section;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for roles allowed into `section`
#[component]
pub fn RequireRole(section: Section, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let strings = use_strings();
    let children = StoredValue::new(children);

    move || {
        let (restoring, allowed) = auth_state.with(|s| (s.restoring, s.can_access(section)));
        if restoring {
            view! { <LoadingState /> }.into_any()
        } else if allowed {
            children.with_value(|c| c()).into_any()
        } else {
            view! {
                <div class="full-page-state">
                    {icon_sized("settings", 48)}
                    <h2>{move || strings.get().forbidden}</h2>
                </div>
            }
            .into_any()
        }
    }
}

//! Sidebar navigation, filtered by the signed-in role

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::{use_strings, Strings};
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crm_contracts::system::auth::Section;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: &'static str,
    pub section: Section,
    label: fn(&Strings) -> &'static str,
}

impl NavItem {
    pub fn label(&self, strings: &Strings) -> &'static str {
        (self.label)(strings)
    }

    /// `/bids/12` keeps `/bids` highlighted
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname == self.path
            || pathname
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { path: "/bids", icon: "bids", section: Section::Bids, label: |s| s.nav_bids },
    NavItem { path: "/customers", icon: "customers", section: Section::Customers, label: |s| s.nav_customers },
    NavItem { path: "/branches", icon: "branches", section: Section::Catalog, label: |s| s.nav_branches },
    NavItem { path: "/categories", icon: "categories", section: Section::Catalog, label: |s| s.nav_categories },
    NavItem { path: "/products", icon: "products", section: Section::Catalog, label: |s| s.nav_products },
    NavItem { path: "/qualities", icon: "qualities", section: Section::Catalog, label: |s| s.nav_qualities },
    NavItem { path: "/factory-statuses", icon: "factory", section: Section::Catalog, label: |s| s.nav_factory_statuses },
    NavItem { path: "/settings", icon: "settings", section: Section::Settings, label: |s| s.nav_settings },
];

pub fn visible_items(auth: &AuthState) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| auth.can_access(item.section))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let strings = use_strings();
    let (auth_state, _) = use_auth();
    let location = use_location();

    let items = move || {
        let pathname = location.pathname.get();
        let collapsed = ctx.sidebar_collapsed.get();
        let s = strings.get();
        auth_state
            .with(visible_items)
            .into_iter()
            .map(|item| {
                let label = item.label(s);
                let class = if item.is_active(&pathname) {
                    "sidebar__item sidebar__item--active"
                } else {
                    "sidebar__item"
                };
                view! {
                    <A href=item.path attr:class=class attr:title=label>
                        {icon(item.icon)}
                        {(!collapsed).then(|| view! { <span class="sidebar__label">{label}</span> })}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || ctx.sidebar_collapsed.get()>
            {items}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::system::auth::{Role, UserInfo};

    fn signed_in(role: Role) -> AuthState {
        AuthState {
            access_token: Some("t".into()),
            user: Some(UserInfo {
                id: 1,
                username: "u".into(),
                full_name: None,
                role,
            }),
            restoring: false,
        }
    }

    #[test]
    fn test_menu_follows_role() {
        let paths = |role| {
            visible_items(&signed_in(role))
                .into_iter()
                .map(|i| i.path)
                .collect::<Vec<_>>()
        };
        assert_eq!(paths(Role::Operator), vec!["/bids", "/customers"]);
        assert!(!paths(Role::Manager).contains(&"/settings"));
        assert_eq!(paths(Role::Admin).len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_active_item() {
        let bids = NAV_ITEMS[0];
        assert!(bids.is_active("/bids"));
        assert!(bids.is_active("/bids/12"));
        assert!(!bids.is_active("/bidsx"));
    }
}

//! Interface strings.
//!
//! Each locale is a compile-time [`Strings`] table, so a missing translation
//! is a build error rather than a blank label. Templates use `{}`
//! placeholders filled with [`fill_one`].

mod en;
mod ru;
mod uz;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
    Uz,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::Ru, Self::En, Self::Uz];

    pub fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Uz => "uz",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ru => "Русский",
            Self::En => "English",
            Self::Uz => "O'zbekcha",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ru => &ru::STRINGS,
            Self::En => &en::STRINGS,
            Self::Uz => &uz::STRINGS,
        }
    }
}

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// Strings of the current locale; reactive on locale changes
pub fn use_strings() -> Signal<&'static Strings> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");
    let locale = ctx.locale;
    Signal::derive(move || locale.get().strings())
}

#[derive(Debug)]
pub struct Strings {
    // common
    pub app_title: &'static str,
    pub loading: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub create: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub search: &'static str,
    pub filters: &'static str,
    pub clear_filters: &'static str,
    pub all: &'static str,
    pub actions: &'static str,
    pub empty_table: &'static str,
    pub load_failed: &'static str,
    pub retry: &'static str,
    pub back_home: &'static str,
    pub created_success: &'static str,
    pub saved_success: &'static str,
    pub deleted_success: &'static str,
    pub generic_error: &'static str,
    pub confirm_delete_title: &'static str,
    pub confirm_delete_text: &'static str,
    pub deleting: &'static str,
    pub saving: &'static str,
    pub new_record: &'static str,
    pub edit_record: &'static str,
    // pagination
    pub first_page: &'static str,
    pub prev_page: &'static str,
    pub next_page: &'static str,
    pub last_page: &'static str,
    // validation
    pub required: &'static str,
    pub invalid_phone: &'static str,
    pub not_integer: &'static str,
    pub not_number: &'static str,
    pub too_long: &'static str,
    pub below_min: &'static str,
    // auth
    pub login_title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub sign_in: &'static str,
    pub signing_in: &'static str,
    pub logout: &'static str,
    pub login_failed: &'static str,
    pub forbidden: &'static str,
    pub session_expired: &'static str,
    // full-page errors
    pub not_found_title: &'static str,
    pub not_found_text: &'static str,
    pub server_error_title: &'static str,
    pub server_error_text: &'static str,
    // navigation
    pub nav_bids: &'static str,
    pub nav_customers: &'static str,
    pub nav_branches: &'static str,
    pub nav_categories: &'static str,
    pub nav_products: &'static str,
    pub nav_qualities: &'static str,
    pub nav_factory_statuses: &'static str,
    pub nav_settings: &'static str,
    pub language: &'static str,
    pub toggle_sidebar: &'static str,
    // fields
    pub field_id: &'static str,
    pub field_name: &'static str,
    pub field_address: &'static str,
    pub field_phone: &'static str,
    pub field_full_name: &'static str,
    pub field_branch: &'static str,
    pub field_comment: &'static str,
    pub field_category: &'static str,
    pub field_quality: &'static str,
    pub field_price: &'static str,
    pub field_image: &'static str,
    pub field_color: &'static str,
    pub field_customer: &'static str,
    pub field_status: &'static str,
    pub field_created_at: &'static str,
    pub field_total: &'static str,
    pub field_product: &'static str,
    pub field_quantity: &'static str,
    pub field_amount: &'static str,
    pub field_currency: &'static str,
    pub field_paid_at: &'static str,
    pub field_note: &'static str,
    pub field_service: &'static str,
    // bid details
    pub bid_title: &'static str,
    pub tab_general: &'static str,
    pub tab_calculation: &'static str,
    pub tab_results: &'static str,
    pub calculate: &'static str,
    pub calculating: &'static str,
    pub forecast_done: &'static str,
    pub results_empty: &'static str,
    pub product_lines: &'static str,
    pub service_lines: &'static str,
    pub transactions: &'static str,
    pub add_product: &'static str,
    pub add_service: &'static str,
    pub remove_line: &'static str,
    pub subtotal_products: &'static str,
    pub subtotal_services: &'static str,
    pub paid: &'static str,
    pub balance: &'static str,
    pub total_local: &'static str,
    pub estimate_hint: &'static str,
    pub open: &'static str,
    // settings
    pub company_name: &'static str,
    pub currency_rate: &'static str,
    pub currency_code: &'static str,
    pub static_host: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("uz_UZ"), Some(Locale::Uz));
        assert_eq!(Locale::from_code(" RU "), Some(Locale::Ru));
        assert_eq!(Locale::from_code("de"), None);
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_templates_have_placeholders() {
        for locale in Locale::ALL {
            let s = locale.strings();
            assert!(s.bid_title.contains("{}"), "{:?}", locale);
            assert!(s.too_long.contains("{}"), "{:?}", locale);
        }
        assert_eq!(fill_one(Locale::En.strings().bid_title, 7), "Bid #7");
    }
}

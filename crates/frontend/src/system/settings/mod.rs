//! Tenant settings: company name, currency rate and the static asset host.

pub mod api;
pub mod page;

use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::i18n::Strings;
use crate::shared::query::RetryPolicy;
use crm_contracts::system::settings::OrganizationSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn settings_fields(strings: &'static Strings) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("company_name", strings.company_name)
            .required()
            .max_length(120),
        FieldSpec::new("currency_rate", strings.currency_rate, FieldKind::Decimal)
            .required()
            .min(0.0),
        FieldSpec::text("currency_code", strings.currency_code)
            .required()
            .max_length(3),
        FieldSpec::text("static_host", strings.static_host).max_length(255),
    ]
}

pub fn settings_values(settings: &OrganizationSettings) -> FormValues {
    FormValues::from([
        ("company_name".to_string(), settings.company_name.clone()),
        ("currency_rate".to_string(), settings.currency_rate.to_string()),
        ("currency_code".to_string(), settings.currency_code.clone()),
        (
            "static_host".to_string(),
            settings.static_host.clone().unwrap_or_default(),
        ),
    ])
}

/// Loads tenant settings into the app config once a session exists.
/// Failure keeps the defaults (rate 1.0) and is only logged.
pub fn load_into_config(api: ApiClient, config: RwSignal<AppConfig>, retry: RetryPolicy) {
    spawn_local(async move {
        match api::fetch_settings(&api, retry).await {
            Ok(settings) => {
                log::debug!("settings loaded: rate={}", settings.currency_rate);
                config.try_update(|c| c.organization = settings);
            }
            Err(e) => log::warn!("settings not loaded: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::form::{build_payload, validate};
    use crate::shared::i18n::Locale;

    #[test]
    fn test_settings_values_round_through_payload() {
        let strings = Locale::En.strings();
        let settings = OrganizationSettings {
            company_name: "Gilam".into(),
            currency_rate: 12650.5,
            currency_code: "UZS".into(),
            static_host: None,
        };
        let fields = settings_fields(strings);
        let values = settings_values(&settings);
        assert!(validate(&fields, &values, strings).is_empty());

        let payload = build_payload(&fields, &values);
        assert_eq!(payload["currency_rate"], serde_json::json!(12650.5));
        assert_eq!(payload["static_host"], serde_json::Value::Null);
        let back: OrganizationSettings = serde_json::from_value(payload).unwrap();
        assert_eq!(back.company_name, "Gilam");
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let strings = Locale::En.strings();
        let mut values = settings_values(&OrganizationSettings::default());
        values.insert("company_name".into(), "Gilam".into());
        values.insert("currency_rate".into(), "-1".into());
        let errors = validate(&settings_fields(strings), &values, strings);
        assert_eq!(errors.get("currency_rate"), Some(strings.below_min));
    }
}

use super::{api, settings_fields, settings_values};
use crate::shared::api::use_api;
use crate::shared::components::{ErrorState, LoadingState, PageHeader};
use crate::shared::config::use_app_config;
use crate::shared::crud::form::{submit_form, FormMachine, FormPhase, SubmitContext};
use crate::shared::crud::form_modal::form_field;
use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::query::{use_query_client, QueryKey};
use crm_contracts::system::settings::OrganizationSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SETTINGS_ID: i64 = 0;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = use_api();
    let client = use_query_client();
    let notifier = use_notifier();
    let config = use_app_config();
    let strings = use_strings();

    let form = RwSignal::new(FormMachine::default());
    let key = QueryKey::new("settings");

    let load = {
        let api = api.clone();
        move || {
            form.update(|m| m.open_edit(SETTINGS_ID));
            let api = api.clone();
            spawn_local(async move {
                match api::fetch_settings(&api, client.retry).await {
                    Ok(settings) => {
                        form.try_update(|m| m.loaded(SETTINGS_ID, settings_values(&settings)));
                    }
                    Err(e) => {
                        let message = e.user_message(strings.get_untracked().load_failed);
                        form.try_update(|m| m.load_failed(SETTINGS_ID, message));
                    }
                }
            });
        }
    };
    load();

    let on_save = {
        let api = api.clone();
        let key = key.clone();
        move |_| {
            let api = api.clone();
            let key = key.clone();
            spawn_local(async move {
                let strings = strings.get_untracked();
                let fields = settings_fields(strings);
                let saved = submit_form(
                    &form,
                    SubmitContext {
                        fields: &fields,
                        strings,
                        list_key: &key,
                        invalidator: &client,
                        notifier: &notifier,
                    },
                    |_, payload| async move {
                        let saved = api::save_settings(&api, &payload).await?;
                        // some deployments answer 204
                        let stored = serde_json::from_value::<OrganizationSettings>(saved.clone())
                            .or_else(|_| serde_json::from_value::<OrganizationSettings>(payload));
                        if let Ok(settings) = stored {
                            config.try_update(|c| c.organization = settings);
                        }
                        Ok(saved)
                    },
                )
                .await;
                if saved {
                    let values = config.with_untracked(|c| settings_values(&c.organization));
                    form.try_update(|m| {
                        m.open_edit(SETTINGS_ID);
                        m.loaded(SETTINGS_ID, values);
                    });
                }
            });
        }
    };

    let phase = Memo::new(move |_| form.with(|m| m.phase.clone()));
    let retry = Callback::new(move |_| load());

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || strings.get().nav_settings.to_string())>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || !form.with(FormMachine::can_submit))
                >
                    {icon("settings")}
                    {move || {
                        let s = strings.get();
                        if form.with(FormMachine::is_submitting) { s.saving } else { s.save }
                    }}
                </Button>
            </PageHeader>
            <div class="page-content form settings-form">
                {move || match phase.get() {
                    FormPhase::Loading(_) | FormPhase::Closed => view! { <LoadingState /> }.into_any(),
                    FormPhase::LoadFailed { message, .. } => view! {
                        <ErrorState message=Signal::derive(move || message.clone()) on_retry=retry />
                    }
                    .into_any(),
                    FormPhase::Open(_) | FormPhase::Submitting(_) => settings_fields(strings.get_untracked())
                        .into_iter()
                        .map(|field| form_field(field, form))
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

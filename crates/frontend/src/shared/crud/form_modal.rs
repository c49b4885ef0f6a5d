use super::form::{
    load_for_edit, submit_form, FieldKind, FieldSpec, FormMachine, FormMode, FormPhase, FormValues,
    SubmitContext,
};
use super::options::use_relation_options;
use super::AdminResource;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::i18n::{use_strings, Strings};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle, ModalOptions, ModalStackService};
use crate::shared::notify::{use_notifier, NotificationService};
use crate::shared::query::{use_query_client, QueryClient, QueryKey};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

/// Services a list page hands to its modals. Collected once while the page
/// is set up, since event handlers run outside the component tree.
#[derive(Clone)]
pub struct CrudServices {
    pub api: ApiClient,
    pub client: QueryClient,
    pub notifier: NotificationService,
    pub stack: ModalStackService,
    pub strings: Signal<&'static Strings>,
}

impl CrudServices {
    pub fn from_context() -> Self {
        Self {
            api: use_api(),
            client: use_query_client(),
            notifier: use_notifier(),
            stack: use_modal_stack(),
            strings: use_strings(),
        }
    }
}

/// Opens the create or edit form of `R` on the modal stack
pub fn open_form_modal<R: AdminResource>(svc: CrudServices, form: RwSignal<FormMachine>, mode: FormMode) {
    match mode {
        FormMode::Create => form.set({
            let mut m = FormMachine::default();
            m.open_create(FormValues::new());
            m
        }),
        FormMode::Edit(id) => {
            let api = svc.api.clone();
            let retry = svc.client.retry;
            let strings = svc.strings.get_untracked();
            spawn_local(async move {
                let fetch = async { api.get::<R>(id, retry).await.map(|r| r.form_values()) };
                load_for_edit(&form, id, strings, fetch).await;
            });
        }
    }

    let options = ModalOptions {
        modal_class: Some("modal--form".to_string()),
        can_close: Some(Arc::new(move || !form.with_untracked(FormMachine::is_submitting))),
        on_close: Some(Arc::new(move || {
            form.try_update(FormMachine::dismiss);
        })),
    };
    let stack = svc.stack;
    stack.push_with(options, move |handle| {
        form_modal_view::<R>(svc.clone(), form, handle)
    });
}

#[derive(Debug, Clone, PartialEq)]
enum BodyKind {
    Loading,
    Failed(String),
    Fields,
}

fn form_modal_view<R: AdminResource>(
    svc: CrudServices,
    form: RwSignal<FormMachine>,
    handle: ModalHandle,
) -> AnyView {
    let strings = svc.strings;
    let key = QueryKey::table(R::ENDPOINT);

    let title = move || {
        let s = strings.get();
        let action = match form.with(|m| m.phase.clone()) {
            FormPhase::Open(FormMode::Create) | FormPhase::Submitting(FormMode::Create) => s.new_record,
            _ => s.edit_record,
        };
        format!("{}: {}", R::title(s), action)
    };

    let on_cancel = move |_| {
        if form.try_update(FormMachine::close).unwrap_or(true) {
            handle.close();
        }
    };

    let on_submit = {
        let svc = svc.clone();
        move |_| {
            let svc = svc.clone();
            let key = key.clone();
            spawn_local(async move {
                let strings = svc.strings.get_untracked();
                let fields = R::form_fields(strings);
                let api = svc.api.clone();
                let saved = submit_form(
                    &form,
                    SubmitContext {
                        fields: &fields,
                        strings,
                        list_key: &key,
                        invalidator: &svc.client,
                        notifier: &svc.notifier,
                    },
                    |mode, payload| async move {
                        match mode {
                            FormMode::Create => api.create::<R>(&payload).await,
                            FormMode::Edit(id) => api.update::<R>(id, &payload).await,
                        }
                    },
                )
                .await;
                if saved {
                    handle.close();
                }
            });
        }
    };

    // inputs are rebuilt only when the body kind changes, not on every keystroke
    let body_kind = Memo::new(move |_| {
        form.with(|m| match &m.phase {
            FormPhase::Loading(_) => BodyKind::Loading,
            FormPhase::LoadFailed { message, .. } => BodyKind::Failed(message.clone()),
            _ => BodyKind::Fields,
        })
    });

    let body = move || match body_kind.get() {
        BodyKind::Loading => view! {
            <div class="modal__loading"><Spinner /></div>
        }
        .into_any(),
        BodyKind::Failed(message) => view! {
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        }
        .into_any(),
        BodyKind::Fields => R::form_fields(strings.get_untracked())
            .into_iter()
            .map(|field| form_field(field, form))
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="details-container">
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
            </div>
            <div class="modal-body form">{body}</div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    {move || strings.get().cancel}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_submit
                    disabled=Signal::derive(move || !form.with(FormMachine::can_submit))
                >
                    {move || {
                        let s = strings.get();
                        if form.with(FormMachine::is_submitting) { s.saving } else { s.save }
                    }}
                </Button>
            </div>
        </div>
    }
    .into_any()
}

/// One labeled input bound to the form machine
pub(crate) fn form_field(field: FieldSpec, form: RwSignal<FormMachine>) -> impl IntoView {
    let name = field.name;
    let value = move || form.with(|m| m.value(name));
    let error = move || form.with(|m| m.errors.get(name).map(str::to_string));
    let set = move |v: String| form.update(|m| m.set_value(name, v));
    let disabled = move || form.with(FormMachine::is_submitting);

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                class="form__input form__textarea"
                prop:value=value
                disabled=disabled
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Relation { endpoint, label_key } => {
            let options = use_relation_options(endpoint, label_key);
            view! {
                <select
                    class="form__input"
                    prop:value=value
                    disabled=disabled
                    on:change=move |ev| set(event_target_value(&ev))
                >
                    <option value="">"-"</option>
                    {move || {
                        let current = value();
                        options
                            .get()
                            .into_iter()
                            .map(|(id, label)| {
                                let id = id.to_string();
                                let selected = id == current;
                                view! { <option value=id selected=selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
        kind => {
            let input_type = match kind {
                FieldKind::Phone => "tel",
                FieldKind::Color => "color",
                _ => "text",
            };
            let input_mode = match kind {
                FieldKind::Integer => "numeric",
                FieldKind::Decimal => "decimal",
                _ => "text",
            };
            view! {
                <input
                    class="form__input"
                    type=input_type
                    inputmode=input_mode
                    prop:value=value
                    disabled=disabled
                    on:input=move |ev| set(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error().is_some()>
            <label class="form__label">
                {field.label}
                {field.rules.required.then_some(" *")}
            </label>
            {input}
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

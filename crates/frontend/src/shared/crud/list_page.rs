use super::delete::{DeleteDialog, DeleteTarget};
use super::delete_modal::{open_delete_modal, target_label};
use super::form::{FieldKind, FormMachine, FormMode};
use super::form_modal::{open_form_modal, CrudServices};
use super::options::use_relation_options;
use super::{AdminResource, FilterKind, FilterSpec};
use crate::shared::columns::RelationLabels;
use crate::shared::components::{FilterPanel, PageHeader, PaginationControls};
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::table::{data_table, use_table_data, RowActions};
use crate::shared::view_state::{use_deferred_navigate, use_url_view_state, UrlViewState};
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use thaw::*;

/// Relation endpoints referenced by the form, with their label keys
fn relation_sources<R: AdminResource>(
    strings: &'static crate::shared::i18n::Strings,
) -> Vec<(&'static str, &'static str)> {
    let mut sources: Vec<(&'static str, &'static str)> = Vec::new();
    let from_fields = R::form_fields(strings).into_iter().filter_map(|f| match f.kind {
        FieldKind::Relation { endpoint, label_key } => Some((endpoint, label_key)),
        _ => None,
    });
    let from_filters = R::filters(strings).into_iter().filter_map(|f| match f.kind {
        FilterKind::Relation { endpoint, label_key } => Some((endpoint, label_key)),
        FilterKind::Search => None,
    });
    for source in from_fields.chain(from_filters) {
        if !sources.iter().any(|(e, _)| *e == source.0) {
            sources.push(source);
        }
    }
    sources
}

/// Labels of every related record the table may reference by id
fn use_relation_labels<R: AdminResource>() -> Signal<RelationLabels> {
    let strings = crate::shared::i18n::use_strings().get_untracked();
    let lists: Vec<_> = relation_sources::<R>(strings)
        .into_iter()
        .map(|(endpoint, label_key)| (endpoint, use_relation_options(endpoint, label_key)))
        .collect();

    Signal::derive(move || {
        let mut labels = RelationLabels::default();
        for (endpoint, options) in &lists {
            labels.extend(endpoint, options.get());
        }
        labels
    })
}

fn filter_control(spec: FilterSpec, url: UrlViewState) -> impl IntoView {
    let key = spec.key;
    let current = move || url.state.with(|s| s.filter(key).unwrap_or_default().to_string());
    let apply = move |value: String| url.set_filter(key, Some(value));

    let control = match spec.kind {
        FilterKind::Search => view! {
            <input
                class="form__input"
                type="search"
                prop:value=current
                on:change=move |ev| apply(event_target_value(&ev))
            />
        }
        .into_any(),
        FilterKind::Relation { endpoint, label_key } => {
            let options = use_relation_options(endpoint, label_key);
            let strings = crate::shared::i18n::use_strings();
            view! {
                <select
                    class="form__input"
                    prop:value=current
                    on:change=move |ev| apply(event_target_value(&ev))
                >
                    <option value="">{move || strings.get().all}</option>
                    {move || {
                        let selected_id = current();
                        options
                            .get()
                            .into_iter()
                            .map(|(id, label)| {
                                let id = id.to_string();
                                let selected = id == selected_id;
                                view! { <option value=id selected=selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
    };

    view! {
        <div class="filter-field">
            <Label>{spec.label}</Label>
            {control}
        </div>
    }
}

/// List screen of `R`: filters, paged table, create/edit forms and delete confirmation.
///
/// Page, page size and filters live in the URL query string.
pub fn resource_list_page<R: AdminResource>() -> impl IntoView {
    let svc = CrudServices::from_context();
    let strings = svc.strings;
    let (auth_state, _) = use_auth();
    let config = use_app_config();
    let url = use_url_view_state();
    let view_state = Signal::derive(move || url.state.get());

    let data = use_table_data::<R>(view_state);
    let labels = use_relation_labels::<R>();
    let columns = Signal::derive(move || R::columns(strings.get()));

    let form = RwSignal::new(FormMachine::default());
    let dialog = RwSignal::new(DeleteDialog::default());
    let filters_expanded = RwSignal::new(url.state.with_untracked(|s| s.active_filters_count() > 0));

    let can_delete = move || auth_state.with_untracked(|a| a.can_delete());

    let navigate = use_deferred_navigate();
    let open = R::detail_path(0).map(|_| {
        Callback::new(move |id: i64| {
            if let Some(path) = R::detail_path(id) {
                navigate.run(path);
            }
        })
    });

    let edit = {
        let svc = svc.clone();
        Callback::new(move |id: i64| open_form_modal::<R>(svc.clone(), form, FormMode::Edit(id)))
    };

    let delete = can_delete().then(|| {
        let svc = svc.clone();
        let rows = data.rows;
        Callback::new(move |id: i64| {
            let label = rows.with_untracked(|rows| {
                rows.iter()
                    .find(|r| r.id() == id)
                    .map(|r| r.label())
                    .unwrap_or_default()
            });
            let target = DeleteTarget {
                id,
                label: target_label(&label, id),
            };
            open_delete_modal::<R>(svc.clone(), dialog, target);
        })
    });

    let actions = RowActions {
        open,
        edit: Some(edit),
        delete,
    };

    let on_create = {
        let svc = svc.clone();
        move |_| open_form_modal::<R>(svc.clone(), form, FormMode::Create)
    };

    let reload = {
        let data = data.clone();
        move |_| data.reload()
    };

    let pagination = data.pagination;
    let page_sizes = Signal::derive(move || config.with(|c| c.page_sizes.clone()));

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || R::title(strings.get()).to_string())>
                <Button appearance=ButtonAppearance::Secondary on_click=reload>
                    {icon("refresh")}
                    {move || strings.get().refresh}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_create>
                    {icon("plus")}
                    {move || strings.get().create}
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=Signal::derive(move || url.state.with(|s| s.active_filters_count()))
                on_clear=Callback::new(move |_| url.update(|s| s.clear_filters()))
                pagination_controls=move || view! {
                    <PaginationControls
                        pagination=pagination
                        page_sizes=page_sizes
                        on_page_change=Callback::new(move |page| url.set_page(page))
                        on_limit_change=Callback::new(move |limit| url.update(|s| s.set_limit(limit)))
                    />
                }
                filter_content=move || {
                    R::filters(strings.get())
                        .into_iter()
                        .map(|spec| filter_control(spec, url))
                        .collect_view()
                }
            />

            <div class="page-content">
                {data_table(data.clone(), columns, labels, actions)}
            </div>
        </div>
    }
}

use super::TableData;
use crate::shared::columns::{css_color, Align, CellKind, ColumnSpec, RelationLabels};
use crate::shared::components::{ErrorState, LoadingState};
use crate::shared::config::use_app_config;
use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use crm_contracts::domain::common::Record;
use leptos::prelude::*;
use thaw::*;

/// Row buttons; a missing callback hides its button
#[derive(Clone, Copy, Default)]
pub struct RowActions {
    pub open: Option<Callback<i64>>,
    pub edit: Option<Callback<i64>>,
    pub delete: Option<Callback<i64>>,
}

impl RowActions {
    fn is_empty(&self) -> bool {
        self.open.is_none() && self.edit.is_none() && self.delete.is_none()
    }
}

fn cell_view(kind: CellKind, text: String, asset_url: impl Fn(&str) -> Option<String>) -> AnyView {
    match kind {
        CellKind::Image if text != crate::shared::columns::PLACEHOLDER => match asset_url(&text) {
            Some(src) => view! { <img class="table-thumb" src=src alt="" loading="lazy" /> }.into_any(),
            None => view! { <span>{crate::shared::columns::PLACEHOLDER}</span> }.into_any(),
        },
        CellKind::Color if text != crate::shared::columns::PLACEHOLDER => {
            let chip = css_color(&text).map(|color| {
                view! { <span class="color-chip" style=format!("background: {};", color)></span> }
            });
            view! {
                {chip}
                <span>{text.clone()}</span>
            }
            .into_any()
        }
        _ => view! { <span>{text}</span> }.into_any(),
    }
}

fn action_buttons(id: i64, actions: RowActions) -> impl IntoView {
    let strings = use_strings();
    view! {
        <div class="row-actions">
            {actions.open.map(|cb| view! {
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| cb.run(id)>
                    {move || strings.get().open}
                </Button>
            })}
            {actions.edit.map(|cb| view! {
                <button class="icon-btn" title=move || strings.get().edit on:click=move |_| cb.run(id)>
                    {icon("edit")}
                </button>
            })}
            {actions.delete.map(|cb| view! {
                <button class="icon-btn icon-btn--danger" title=move || strings.get().delete on:click=move |_| cb.run(id)>
                    {icon("trash")}
                </button>
            })}
        </div>
    }
}

/// Table body for one page of rows: loading, error with retry, empty, rows
pub fn data_table<R>(
    data: TableData<R>,
    columns: Signal<Vec<ColumnSpec<R>>>,
    labels: Signal<RelationLabels>,
    actions: RowActions,
) -> impl IntoView
where
    R: Record + Clone + Send + Sync + 'static,
{
    let strings = use_strings();
    let config = use_app_config();
    let TableData {
        rows,
        is_loading,
        error,
        ..
    } = data.clone();
    let has_actions = !actions.is_empty();

    let header = move || {
        columns
            .get()
            .into_iter()
            .map(|c| {
                let class = if c.align == Align::Right { "cell--right" } else { "" };
                view! { <TableHeaderCell class=class>{c.title}</TableHeaderCell> }
            })
            .collect_view()
    };

    let body = move || {
        let columns = columns.get();
        let labels = labels.get();
        let asset_url = move |path: &str| config.with(|c| c.asset_url(path));
        rows.get()
            .into_iter()
            .map(|row| {
                let id = row.id();
                let cells = columns
                    .iter()
                    .map(|c| {
                        let class = if c.align == Align::Right { "cell--right" } else { "" };
                        let content = cell_view(c.kind, c.render(&row, &labels), asset_url);
                        view! {
                            <TableCell class=class>
                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                view! {
                    <TableRow>
                        {cells}
                        {has_actions.then(|| view! { <TableCell>{action_buttons(id, actions)}</TableCell> })}
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <div class="data-table">
            {move || match error.get() {
                Some(e) => {
                    let message = e.user_message(strings.get().load_failed);
                    let data = data.clone();
                    view! {
                        <ErrorState message=message on_retry=Callback::new(move |_| data.reload()) />
                    }
                    .into_any()
                }
                None => ().into_any(),
            }}
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header}
                        {has_actions.then(|| view! {
                            <TableHeaderCell class="cell--actions">{move || strings.get().actions}</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
            <Show when=move || is_loading.get()>
                <LoadingState />
            </Show>
            <Show when=move || { !is_loading.get() && error.with(Option::is_none) && rows.with(Vec::is_empty) }>
                <div class="data-table__empty">{move || strings.get().empty_table}</div>
            </Show>
        </div>
    }
}

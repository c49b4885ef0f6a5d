//! Full-page states reached through the event bus: 404 and 500.

use crate::shared::i18n::use_strings;
use crate::shared::icons::icon_sized;
use crate::system::pages::login::HOME_PATH;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Message of the last server failure that sent the user to `/500`
#[derive(Clone, Copy)]
pub struct ServerErrorDetail(pub RwSignal<Option<String>>);

impl ServerErrorDetail {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }
}

impl Default for ServerErrorDetail {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
fn FullPageState(
    code: &'static str,
    title: Signal<String>,
    text: Signal<String>,
    #[prop(default = None)] detail: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let strings = use_strings();
    view! {
        <div class="full-page-state">
            <div class="full-page-state__code">{code}</div>
            {icon_sized("x", 40)}
            <h1>{title}</h1>
            <p>{text}</p>
            {detail.map(|d| move || d.get().map(|m| view! {
                <MessageBar intent=MessageBarIntent::Error>{m}</MessageBar>
            }))}
            <A href=HOME_PATH attr:class="btn-primary">{move || strings.get().back_home}</A>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let strings = use_strings();
    view! {
        <FullPageState
            code="404"
            title=Signal::derive(move || strings.get().not_found_title.to_string())
            text=Signal::derive(move || strings.get().not_found_text.to_string())
        />
    }
}

#[component]
pub fn ServerErrorPage() -> impl IntoView {
    let strings = use_strings();
    let detail = use_context::<ServerErrorDetail>().map(|d| Signal::from(d.0));
    view! {
        <FullPageState
            code="500"
            title=Signal::derive(move || strings.get().server_error_title.to_string())
            text=Signal::derive(move || strings.get().server_error_text.to_string())
            detail=detail
        />
    }
}

use crate::shared::i18n::use_strings;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingState() -> impl IntoView {
    let strings = use_strings();
    view! {
        <div class="load-state">
            <Spinner />
            <span class="load-state__text">{move || strings.get().loading}</span>
        </div>
    }
}

/// Inline error with a retry button; used when a table or detail fetch fails
#[component]
pub fn ErrorState(#[prop(into)] message: Signal<String>, on_retry: Callback<()>) -> impl IntoView {
    let strings = use_strings();
    view! {
        <div class="load-state load-state--error">
            <MessageBar intent=MessageBarIntent::Error>
                <span>{move || message.get()}</span>
            </MessageBar>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_retry.run(())>
                {icon("refresh")}
                {move || strings.get().retry}
            </Button>
        </div>
    }
}

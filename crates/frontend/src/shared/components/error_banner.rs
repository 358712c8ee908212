use crate::shared::i18n::{t, use_lang};
use crate::shared::icons::icon;
use contracts::shared::api_response::ApiError;
use leptos::prelude::*;

/// Inline dismissible error of a list screen
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    error: Signal<Option<ApiError>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let lang = use_lang();

    view! {
        {move || error.get().map(|err| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{err.message(lang.get()).to_string()}</span>
                <button
                    class="warning-box__close"
                    title=t("common.dismiss")
                    on:click=move |_| on_dismiss.run(())
                >
                    {icon("x")}
                </button>
            </div>
        })}
    }
}

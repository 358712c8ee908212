use crate::shared::i18n::t;
use leptos::prelude::*;

/// Full-page state for a record that no longer exists
#[component]
pub fn NotFound(#[prop(optional)] on_back: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <div class="not-found__text">{t("common.not_found")}</div>
            {on_back.map(|cb| view! {
                <button class="button button--secondary" on:click=move |_| cb.run(())>
                    {t("common.back")}
                </button>
            })}
        </div>
    }
}

//! TopHeader component - application top navigation bar with the sidebar
//! toggle and the language switch.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=move |_| ctx.toggle_left()>
                    {icon("chevron-down")}
                </button>
                <span class="top-header__title">{t("app.title")}</span>
            </div>

            <div class="top-header__actions">
                // label names the language to switch to
                <button class="top-header__icon-btn" on:click=move |_| ctx.toggle_lang()>
                    {icon("globe")}
                    <span>{t("common.language")}</span>
                </button>
            </div>
        </div>
    }
}

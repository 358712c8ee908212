use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::{tab_label, TabPage};
use crate::shared::i18n::use_lang;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let lang = use_lang();

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(&key_for_active)));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    let label = move || tab_label(&tab.key, tab.detail.as_deref(), lang.get());

    view! {
        <div
            class="tabs__handle"
            class:tabs__handle--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key_for_click)
        >
            <span>{label}</span>
            <button class="tabs__close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Tab bar plus the content of every open tab
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

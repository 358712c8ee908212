use crate::shared::i18n::{t, t_with, use_lang};
use crate::shared::icons::icon;
use contracts::shared::list_query::PAGE_SIZE_OPTIONS;
use contracts::shared::pagination::PaginationMeta;
use leptos::prelude::*;

/// PaginationControls component - server pagination with a page number window
///
/// Pages are 1-based. `current_page` is the requested page, which can run
/// ahead of `pagination.page` while a fetch is in flight.
#[component]
pub fn PaginationControls(
    /// Last pagination block received from the server
    #[prop(into)]
    pagination: Signal<PaginationMeta>,

    /// Requested page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    page_size: Signal<u32>,

    /// Page numbers to render as buttons
    #[prop(into)]
    visible_pages: Signal<Vec<u32>>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let lang = use_lang();
    let total_pages = move || pagination.with(|p| p.total_pages);
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title=t("pagination.first")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title=t("pagination.previous")
            >
                {icon("chevron-left")}
            </button>

            <For
                each=move || visible_pages.get()
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class="pagination-btn pagination-btn--number"
                            class:pagination-btn--active=move || current_page.get() == page
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page}
                        </button>
                    }
                }
            />

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title=t("pagination.next")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=at_last
                title=t("pagination.last")
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">
                {move || {
                    pagination.with(|p| {
                        t_with(
                            "pagination.summary",
                            lang.get(),
                            &[
                                ("start", p.start_index.to_string()),
                                ("end", p.end_index.to_string()),
                                ("total", p.total_count.to_string()),
                            ],
                        )
                    })
                }}
            </span>

            <select
                class="page-size-select"
                title=t("common.page_size")
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

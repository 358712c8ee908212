use crate::domain::a001_department::api as department_api;
use crate::domain::a005_roster::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_key, GENERATE_WORKING_HOURS};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::{t, use_lang};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, VISIBLE_PAGE_BUTTONS};
use contracts::domain::a001_department::aggregate::DepartmentLookup;
use contracts::domain::a005_roster::filters::{RosterCategorical, RosterDateRange, RosterSortBy};
use contracts::domain::common::LocalizedName;
use contracts::enums::RosterStatus;
use contracts::shared::i18n::localize;
use contracts::shared::list_query::{DateRange, ListFilters};
use leptos::prelude::*;
use thaw::*;

const STORAGE_KEY: &str = "a005_roster_list";

fn status_badge_color(status: RosterStatus) -> BadgeColor {
    match status {
        RosterStatus::Draft => BadgeColor::Warning,
        RosterStatus::Published => BadgeColor::Success,
        RosterStatus::Archived => BadgeColor::Subtle,
    }
}

#[component]
pub fn RosterList() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let lang = use_lang();
    let query = use_list_query(STORAGE_KEY, api::fetch_list);
    let is_expanded = RwSignal::new(false);
    let departments = RwSignal::new(Vec::<DepartmentLookup>::new());

    // Department options (once)
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match department_api::fetch_lookup().await {
                Ok(list) => departments.set(list),
                Err(e) => log::warn!("department lookup failed: {}", e),
            }
        });
    });

    let is_fetching = Signal::derive(move || query.with(|m| m.is_fetching));
    let sort = Signal::derive(move || query.with(|m| m.filters.sort()));
    let on_sort = Callback::new(move |col: RosterSortBy| query.toggle_sort(col));

    let open_working_hours = move |id: i64, title: String| {
        tabs_store.open_tab(&detail_key(GENERATE_WORKING_HOURS, id), Some(title));
    };

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("calendar")}
                    <h1 class="page__title">{t("nav.rosters")}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || query.with(|m| m.pagination.total_count.to_string())}</span>
                    </Badge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.refresh()
                        disabled=is_fetching
                    >
                        {icon("refresh")}
                        {move || localize(if is_fetching.get() { "common.loading" } else { "common.refresh" }, lang.get())}
                    </Button>
                </div>
            </div>

            <ErrorBanner
                error=Signal::derive(move || query.with(|m| m.last_error.clone()))
                on_dismiss=Callback::new(move |_| query.dismiss_error())
            />

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || query.active_filter_count())
                on_clear=Callback::new(move |_| query.clear_filters())
                pagination_controls=move || view! {
                    <PaginationControls
                        pagination=Signal::derive(move || query.with(|m| m.pagination.clone()))
                        current_page=Signal::derive(move || query.with(|m| m.filters.page))
                        page_size=Signal::derive(move || query.with(|m| m.filters.page_size))
                        visible_pages=Signal::derive(move || query.visible_page_numbers(VISIBLE_PAGE_BUTTONS))
                        on_page_change=Callback::new(move |page| query.set_page(page))
                        on_page_size_change=Callback::new(move |size| query.set_page_size(size))
                    />
                }
                filter_content=move || view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="min-width: 280px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>{t("common.search")}</Label>
                                <input
                                    type="search"
                                    class="form__input"
                                    placeholder=t("common.search")
                                    prop:value=move || query.with(|m| m.search_input.clone())
                                    on:input=move |ev| query.set_search(event_target_value(&ev))
                                />
                            </Flex>
                        </div>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("common.status")}</Label>
                            <select
                                class="form__select"
                                prop:value=move || query.with(|m| m.filters.status.map(|s| s.code()).unwrap_or_default())
                                on:change=move |ev| query.set_categorical(RosterCategorical::Status, event_target_value(&ev))
                            >
                                <option value="">{t("common.all")}</option>
                                {RosterStatus::all().into_iter().map(|status| view! {
                                    <option value=status.code()>{t(status.label_key())}</option>
                                }).collect_view()}
                            </select>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("common.department")}</Label>
                            <select
                                class="form__select"
                                prop:value=move || query.with(|m| m.filters.department_id.map(|d| d.to_string()).unwrap_or_default())
                                on:change=move |ev| query.set_categorical(RosterCategorical::Department, event_target_value(&ev))
                            >
                                <option value="">{t("common.all")}</option>
                                <For
                                    each=move || departments.get()
                                    key=|d| d.id
                                    children=move |d| {
                                        let value = d.id.to_string();
                                        view! {
                                            <option value=value>{move || d.name(lang.get()).to_string()}</option>
                                        }
                                    }
                                />
                            </select>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("roster.start_date")}</Label>
                            <Flex gap=FlexGap::Small>
                                <DateInput
                                    value=Signal::derive(move || query.with(|m| m.filters.start_date_from))
                                    on_change=move |from| {
                                        let to = query.with_untracked(|m| m.filters.start_date_to);
                                        query.set_date_range(RosterDateRange::StartDate, DateRange::new(from, to));
                                    }
                                />
                                <DateInput
                                    value=Signal::derive(move || query.with(|m| m.filters.start_date_to))
                                    on_change=move |to| {
                                        let from = query.with_untracked(|m| m.filters.start_date_from);
                                        query.set_date_range(RosterDateRange::StartDate, DateRange::new(from, to));
                                    }
                                />
                            </Flex>
                        </Flex>
                    </Flex>
                }
            />

            <div class="page-content">
                <div style="width: 100%; overflow-x: auto;">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label=t("roster.title")
                                    column=RosterSortBy::Title
                                    current=sort
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <TableHeaderCell>{t("common.department")}</TableHeaderCell>
                                <SortableHeaderCell
                                    label=t("roster.start_date")
                                    column=RosterSortBy::StartDate
                                    current=sort
                                    on_sort=on_sort
                                />
                                <TableHeaderCell>{t("roster.end_date")}</TableHeaderCell>
                                <TableHeaderCell>{t("common.status")}</TableHeaderCell>
                                <TableHeaderCell>{t("common.actions")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let (fetching, items) = query.with(|m| (m.is_fetching, m.items.clone()));
                                if fetching && items.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                <TableCellLayout>
                                                    <span class="text-muted">{t("common.loading")}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }

                                if items.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                <TableCellLayout>
                                                    <span class="text-muted">{t("common.no_data")}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }

                                let lang_now = lang.get();
                                items.into_iter()
                                    .map(|row| {
                                        let id = row.id.value();
                                        let title = row.title.clone();
                                        let title_cell = row.title.clone();
                                        let dept_cell = row.department_name(lang_now);
                                        let status_label = localize(row.status.label_key(), lang_now);
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout truncate=true>{title_cell}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{dept_cell}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_date(row.start_date)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_date(row.end_date)}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Badge appearance=BadgeAppearance::Tint color=status_badge_color(row.status)>
                                                            {status_label}
                                                        </Badge>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_working_hours(id, title.clone())
                                                        >
                                                            {icon("clock")}
                                                            {localize("working_hours.open", lang_now)}
                                                        </Button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

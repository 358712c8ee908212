use crate::domain::a004_contracting_type::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_key, CONTRACTING_TYPE_DETAIL, CONTRACTING_TYPE_NEW};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::i18n::{t, use_lang};
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, VISIBLE_PAGE_BUTTONS};
use contracts::domain::a004_contracting_type::filters::{
    ContractingTypeCategorical, ContractingTypeDateRange, ContractingTypeRange,
    ContractingTypeSortBy,
};
use contracts::domain::common::LocalizedName;
use contracts::shared::i18n::localize;
use contracts::shared::list_query::{DateRange, ListFilters, NumericRange};
use leptos::prelude::*;
use thaw::*;

const STORAGE_KEY: &str = "a004_contracting_type_list";

fn bool_select_value(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

#[component]
pub fn ContractingTypeList() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let lang = use_lang();
    let query = use_list_query(STORAGE_KEY, api::fetch_list);
    let is_expanded = RwSignal::new(false);

    let filters = move || query.with(|m| m.filters.clone());
    let is_fetching = Signal::derive(move || query.with(|m| m.is_fetching));
    let sort = Signal::derive(move || query.with(|m| m.filters.sort()));
    let on_sort = Callback::new(move |col| query.toggle_sort(col));

    let set_hours = move |min: Option<u32>, max: Option<u32>| {
        query.set_range(ContractingTypeRange::HoursPerWeek, NumericRange::new(min, max));
    };
    let parse_hours = |raw: String| raw.trim().parse::<u32>().ok();

    let open_details = move |id: i64, name: String| {
        tabs_store.open_tab(&detail_key(CONTRACTING_TYPE_DETAIL, id), Some(name));
    };

    view! {
        <div class="page page--wide">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("file-text")}
                    <h1 class="page__title">{t("nav.contracting_types")}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || query.with(|m| m.pagination.total_count.to_string())}</span>
                    </Badge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(CONTRACTING_TYPE_NEW, None)
                    >
                        {icon("plus")}
                        {t("common.create")}
                    </Button>
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
                                prop:value=move || bool_select_value(filters().is_active)
                                on:change=move |ev| query.set_categorical(ContractingTypeCategorical::IsActive, event_target_value(&ev))
                            >
                                <option value="">{t("common.all")}</option>
                                <option value="true">{t("common.active")}</option>
                                <option value="false">{t("common.inactive")}</option>
                            </select>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("contracting_type.allow_overtime")}</Label>
                            <select
                                class="form__select"
                                prop:value=move || bool_select_value(filters().allow_overtime_hours)
                                on:change=move |ev| query.set_categorical(ContractingTypeCategorical::AllowOvertimeHours, event_target_value(&ev))
                            >
                                <option value="">{t("common.all")}</option>
                                <option value="true">{t("common.yes")}</option>
                                <option value="false">{t("common.no")}</option>
                            </select>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("contracting_type.hours_per_week")}</Label>
                            <Flex gap=FlexGap::Small>
                                <input
                                    type="number"
                                    min="0"
                                    class="form__input form__input--short"
                                    placeholder=t("common.min")
                                    prop:value=move || filters().min_hours_per_week.map(|v| v.to_string()).unwrap_or_default()
                                    on:change=move |ev| {
                                        let max = query.with_untracked(|m| m.filters.max_hours_per_week);
                                        set_hours(parse_hours(event_target_value(&ev)), max);
                                    }
                                />
                                <input
                                    type="number"
                                    min="0"
                                    class="form__input form__input--short"
                                    placeholder=t("common.max")
                                    prop:value=move || filters().max_hours_per_week.map(|v| v.to_string()).unwrap_or_default()
                                    on:change=move |ev| {
                                        let min = query.with_untracked(|m| m.filters.min_hours_per_week);
                                        set_hours(min, parse_hours(event_target_value(&ev)));
                                    }
                                />
                            </Flex>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>{t("common.created_at")}</Label>
                            <Flex gap=FlexGap::Small>
                                <DateInput
                                    value=Signal::derive(move || query.with(|m| m.filters.created_from))
                                    on_change=move |from| {
                                        let to = query.with_untracked(|m| m.filters.created_to);
                                        query.set_date_range(ContractingTypeDateRange::CreatedAt, DateRange::new(from, to));
                                    }
                                />
                                <DateInput
                                    value=Signal::derive(move || query.with(|m| m.filters.created_to))
                                    on_change=move |to| {
                                        let from = query.with_untracked(|m| m.filters.created_from);
                                        query.set_date_range(ContractingTypeDateRange::CreatedAt, DateRange::new(from, to));
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
                                    label=t("contracting_type.name")
                                    column=ContractingTypeSortBy::Name
                                    current=sort
                                    on_sort=on_sort
                                    min_width=240.0
                                />
                                <SortableHeaderCell
                                    label=t("contracting_type.hours_per_week")
                                    column=ContractingTypeSortBy::HoursPerWeek
                                    current=sort
                                    on_sort=on_sort
                                />
                                <TableHeaderCell>{t("contracting_type.max_hours_per_week")}</TableHeaderCell>
                                <TableHeaderCell>{t("contracting_type.allow_overtime")}</TableHeaderCell>
                                <TableHeaderCell>{t("common.status")}</TableHeaderCell>
                                <SortableHeaderCell
                                    label=t("common.created_at")
                                    column=ContractingTypeSortBy::CreatedAt
                                    current=sort
                                    on_sort=on_sort
                                />
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
                                        let name = row.name(lang_now).to_string();
                                        let name_for_tab = name.clone();
                                        let yes_no = localize(if row.allow_overtime_hours { "common.yes" } else { "common.no" }, lang_now);
                                        let status = localize(if row.is_active { "common.active" } else { "common.inactive" }, lang_now);
                                        view! {
                                            <TableRow
                                                class="table__row--clickable"
                                                on:click=move |_| open_details(id, name_for_tab.clone())
                                            >
                                                <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                                <TableCell class="table__cell--right"><TableCellLayout>{row.hours_per_week}</TableCellLayout></TableCell>
                                                <TableCell class="table__cell--right"><TableCellLayout>{row.max_hours_per_week}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{yes_no}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{status}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{format_optional_datetime(row.created_at)}</TableCellLayout></TableCell>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_select_value() {
        assert_eq!(bool_select_value(Some(true)), "true");
        assert_eq!(bool_select_value(Some(false)), "false");
        assert_eq!(bool_select_value(None), "");
    }
}

use super::view_model::GenerateWorkingHoursVm;
use crate::shared::components::error_dialog::ErrorDialog;
use crate::shared::components::not_found::NotFound;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::{t, use_lang};
use crate::shared::icons::icon;
use contracts::domain::a001_department::aggregate::DepartmentId;
use contracts::domain::a005_roster::aggregate::RosterId;
use contracts::domain::common::LocalizedName;
use contracts::shared::i18n::{localize, Lang};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_working_hours::{
    DegreeNode, DepartmentNode, GenerateWorkingHours, GenerateWorkingHoursResult, ShiftNode,
};
use leptos::prelude::*;
use thaw::*;

fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value.clamp(0.0, 100.0))
}

fn progress_class(degree: &DegreeNode) -> &'static str {
    if degree.is_complete() {
        "progress progress--complete"
    } else if degree.generated_days > 0 {
        "progress progress--partial"
    } else {
        "progress"
    }
}

#[component]
pub fn GenerateWorkingHoursView(roster_id: RosterId, on_close: Callback<()>) -> impl IntoView {
    let vm = GenerateWorkingHoursVm::new(roster_id);
    vm.load();

    let lang = use_lang();
    let title = t(GenerateWorkingHours::title_key());
    let subtitle = Signal::derive(move || {
        vm.roster.with(|r| {
            r.as_ref().map(|r| {
                format!(
                    "{} · {} – {}",
                    r.title,
                    format_date(r.start_date),
                    format_date(r.end_date)
                )
            })
        })
    });
    let is_busy = Signal::derive(move || vm.is_loading.get() || vm.is_generating.get());

    view! {
        <Show
            when=move || !vm.not_found.get()
            fallback=move || view! { <NotFound on_back=on_close /> }
        >
            <div class="page page--wide">
                <PageHeader title=Signal::derive(title) subtitle=subtitle>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.reload_tree()
                        disabled=is_busy
                    >
                        {icon("refresh")}
                        {move || localize(if vm.is_loading.get() { "common.loading" } else { "common.refresh" }, lang.get())}
                    </Button>
                </PageHeader>

                <div class="page-content">
                    <div style="width: 100%; overflow-x: auto;">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                                    <TableHeaderCell min_width=280.0>{t("common.department")}</TableHeaderCell>
                                    <TableHeaderCell>{t("working_hours.days")}</TableHeaderCell>
                                    <TableHeaderCell>{t("working_hours.completion")}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let (loading, departments) = (vm.is_loading.get(), vm.tree.with(|t| t.departments.clone()));
                                    if departments.is_empty() {
                                        let key = if loading { "common.loading" } else { "common.no_data" };
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="4">
                                                    <TableCellLayout>
                                                        <span class="text-muted">{move || localize(key, lang.get())}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    departments
                                        .into_iter()
                                        .map(|dept| department_rows(vm, dept, lang))
                                        .collect_view()
                                        .into_any()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </div>

                <div class="details-actions">
                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="overwrite_existing"
                            prop:checked=move || vm.overwrite_existing.get()
                            on:change=move |ev| vm.overwrite_existing.set(event_target_checked(&ev))
                        />
                        <label for="overwrite_existing">{t("working_hours.overwrite")}</label>
                    </div>

                    {move || vm.selection.with(|s| s.is_empty()).then(|| view! {
                        <span class="text-muted">{t("working_hours.empty_means_all")}</span>
                    })}

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.clear_selection()
                        disabled=Signal::derive(move || vm.selection.with(|s| s.is_empty()))
                    >
                        {icon("x")}
                        {t("working_hours.clear_selection")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.generate_command()
                        disabled=is_busy
                    >
                        {icon("play")}
                        {t("working_hours.generate")}
                    </Button>
                </div>

                {move || vm.result.get().map(|result| view! { <GenerationSummary result=result /> })}

                <ErrorDialog error=vm.api_error />
            </div>
        </Show>
    }
}

fn department_rows(vm: GenerateWorkingHoursVm, dept: DepartmentNode, lang: Signal<Lang>) -> impl IntoView {
    let dept_id = dept.department_id;
    let checked = Signal::derive(move || vm.selection.with(|s| s.is_department_selected(dept_id)));
    let partial = {
        let dept = dept.clone();
        Signal::derive(move || vm.selection.with(|s| s.is_department_partially_selected(&dept)))
    };
    let name = {
        let dept = dept.clone();
        move || dept.name(lang.get()).to_string()
    };

    let shifts = dept
        .shifts
        .iter()
        .cloned()
        .map(|shift| shift_rows(vm, dept_id, shift, lang))
        .collect_view();

    view! {
        <TableRow class="tree__row tree__row--department">
            <TableCheckbox
                checked=checked
                indeterminate=partial
                on_change=Callback::new(move |_| vm.toggle_department(dept_id))
            />
            <TableCell attr:colspan="3">
                <TableCellLayout>
                    <strong>{name}</strong>
                </TableCellLayout>
            </TableCell>
        </TableRow>
        {shifts}
    }
}

fn shift_rows(
    vm: GenerateWorkingHoursVm,
    dept_id: DepartmentId,
    shift: ShiftNode,
    lang: Signal<Lang>,
) -> impl IntoView {
    let shift_id = shift.shift_hours_type_id;
    let checked = Signal::derive(move || vm.selection.with(|s| s.is_shift_selected(shift_id)));
    let partial = {
        let shift = shift.clone();
        Signal::derive(move || vm.selection.with(|s| s.is_shift_partially_selected(&shift)))
    };
    let name = {
        let shift = shift.clone();
        move || shift.name(lang.get()).to_string()
    };

    let degrees = shift
        .scientific_degrees
        .iter()
        .cloned()
        .map(|degree| {
            let degree_id = degree.scientific_degree_id;
            let checked = Signal::derive(move || vm.selection.with(|s| s.is_degree_selected(degree_id)));
            let days = format!("{} / {}", degree.generated_days, degree.total_days);
            let percentage = format_percentage(degree.completion_percentage());
            let class = progress_class(&degree);
            let name = move || degree.name(lang.get()).to_string();
            view! {
                <TableRow class="tree__row tree__row--degree">
                    <TableCheckbox
                        checked=checked
                        on_change=Callback::new(move |_| vm.toggle_degree(degree_id, shift_id, dept_id))
                    />
                    <TableCell>
                        <TableCellLayout><span class="tree__label tree__label--degree">{name}</span></TableCellLayout>
                    </TableCell>
                    <TableCell class="table__cell--right"><TableCellLayout>{days}</TableCellLayout></TableCell>
                    <TableCell class="table__cell--right">
                        <TableCellLayout>
                            <span class=class>{percentage}</span>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <TableRow class="tree__row tree__row--shift">
            <TableCheckbox
                checked=checked
                indeterminate=partial
                on_change=Callback::new(move |_| vm.toggle_shift(shift_id, dept_id))
            />
            <TableCell attr:colspan="3">
                <TableCellLayout><span class="tree__label tree__label--shift">{name}</span></TableCellLayout>
            </TableCell>
        </TableRow>
        {degrees}
    }
}

#[component]
fn GenerationSummary(result: GenerateWorkingHoursResult) -> impl IntoView {
    view! {
        <div class="info-box">
            <strong>{t("working_hours.result")}</strong>
            <Flex gap=FlexGap::Large>
                <span>{t("working_hours.added")}": "{result.added_count}</span>
                <span>{t("working_hours.updated")}": "{result.updated_count}</span>
                <span>{t("working_hours.skipped")}": "{result.skipped_count}</span>
                <span>{t("working_hours.completion")}": "{format_percentage(result.completion_percentage)}</span>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_scientific_degree::aggregate::ScientificDegreeId;

    fn degree(generated_days: u32, total_days: u32) -> DegreeNode {
        DegreeNode {
            scientific_degree_id: ScientificDegreeId::new(1),
            name_en: "Consultant".into(),
            name_ar: "استشاري".into(),
            has_working_hours: generated_days > 0,
            generated_days,
            total_days,
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(66.6), "67%");
        assert_eq!(format_percentage(140.0), "100%");
    }

    #[test]
    fn test_progress_class() {
        assert_eq!(progress_class(&degree(0, 30)), "progress");
        assert_eq!(progress_class(&degree(10, 30)), "progress progress--partial");
        assert_eq!(progress_class(&degree(30, 30)), "progress progress--complete");
    }
}

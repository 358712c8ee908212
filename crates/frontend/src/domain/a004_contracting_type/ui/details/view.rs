use super::view_model::ContractingTypeDetailsVm;
use crate::shared::components::error_dialog::ErrorDialog;
use crate::shared::components::field_error::FieldError;
use crate::shared::components::not_found::NotFound;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use contracts::domain::a004_contracting_type::aggregate::ContractingTypeId;
use leptos::prelude::*;
use thaw::*;

fn parse_hours(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn ContractingTypeDetails(
    id: Option<ContractingTypeId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ContractingTypeDetailsVm::new();
    vm.load_if_needed(id);

    let errors = vm.field_errors;
    let edit_title = t("common.edit");
    let new_title = t("contracting_type.new");
    let title = move || if vm.is_edit_mode() { edit_title() } else { new_title() };

    view! {
        <Show
            when=move || !vm.not_found.get()
            fallback=move || view! { <NotFound on_back=on_close /> }
        >
            <div class="details-container">
                <div class="details-header">
                    <h3>{title}</h3>
                    {move || vm.is_loading.get().then(|| view! {
                        <span class="text-muted">{t("common.loading")}</span>
                    })}
                </div>

                <div class="details-form">
                    <div class="form-group">
                        <label for="name_en">{t("contracting_type.name_en")}</label>
                        <input
                            type="text"
                            id="name_en"
                            prop:value=move || vm.form.with(|f| f.name_en.clone())
                            on:input=move |ev| vm.form.update(|f| f.name_en = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name_en" />
                    </div>

                    <div class="form-group">
                        <label for="name_ar">{t("contracting_type.name_ar")}</label>
                        <input
                            type="text"
                            id="name_ar"
                            dir="rtl"
                            prop:value=move || vm.form.with(|f| f.name_ar.clone())
                            on:input=move |ev| vm.form.update(|f| f.name_ar = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name_ar" />
                    </div>

                    <div class="form-group">
                        <label for="hours_per_week">{t("contracting_type.hours_per_week")}</label>
                        <input
                            type="number"
                            id="hours_per_week"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.hours_per_week.to_string())
                            on:input=move |ev| vm.form.update(|f| f.hours_per_week = parse_hours(&event_target_value(&ev)))
                        />
                        <FieldError errors=errors field="hours_per_week" />
                    </div>

                    <div class="form-group">
                        <label for="max_hours_per_week">{t("contracting_type.max_hours_per_week")}</label>
                        <input
                            type="number"
                            id="max_hours_per_week"
                            min="0"
                            prop:value=move || vm.form.with(|f| f.max_hours_per_week.to_string())
                            on:input=move |ev| vm.form.update(|f| f.max_hours_per_week = parse_hours(&event_target_value(&ev)))
                        />
                        <FieldError errors=errors field="max_hours_per_week" />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="allow_overtime_hours"
                            prop:checked=move || vm.form.with(|f| f.allow_overtime_hours)
                            on:change=move |ev| vm.form.update(|f| f.allow_overtime_hours = event_target_checked(&ev))
                        />
                        <label for="allow_overtime_hours">{t("contracting_type.allow_overtime")}</label>
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="is_active"
                            prop:checked=move || vm.form.with(|f| f.is_active)
                            on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        <label for="is_active">{t("common.active")}</label>
                    </div>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_close)
                        disabled=Signal::derive(move || vm.is_saving.get() || vm.is_loading.get())
                    >
                        {t("common.save")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        {t("common.cancel")}
                    </Button>
                </div>

                <ErrorDialog error=vm.api_error />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours(" 40 "), 40);
        assert_eq!(parse_hours(""), 0);
        assert_eq!(parse_hours("-3"), 0);
    }
}

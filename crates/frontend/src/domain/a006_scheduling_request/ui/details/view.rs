use super::view_model::SchedulingRequestFormVm;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_dialog::ErrorDialog;
use crate::shared::components::field_error::FieldError;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use contracts::domain::a006_scheduling_request::aggregate::DoctorId;
use contracts::domain::a006_scheduling_request::form::{NOTES_MAX_LEN, REASON_MAX_LEN};
use contracts::shared::list_query::parse_optional_i64;
use leptos::prelude::*;
use thaw::*;

fn notes_counter_class(len: usize) -> &'static str {
    if len > NOTES_MAX_LEN {
        "form__counter form__counter--over"
    } else {
        "form__counter"
    }
}

#[component]
pub fn SchedulingRequestForm(on_close: Callback<()>) -> impl IntoView {
    let vm = SchedulingRequestFormVm::new();
    let errors = vm.field_errors;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{t("request.new")}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="doctor_id">{t("request.doctor_id")}</label>
                    <input
                        type="number"
                        id="doctor_id"
                        min="1"
                        prop:value=move || vm.form.with(|f| f.doctor_id.map(|d| d.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let id = parse_optional_i64(&event_target_value(&ev)).map(DoctorId::new);
                            vm.form.update(|f| f.doctor_id = id);
                        }
                    />
                    <FieldError errors=errors field="doctor_id" />
                </div>

                <div class="form-group">
                    <label>{t("request.period")}</label>
                    <Flex gap=FlexGap::Small>
                        <DateInput
                            value=Signal::derive(move || vm.form.with(|f| f.requested_from))
                            on_change=move |from| vm.form.update(|f| f.requested_from = from)
                        />
                        <DateInput
                            value=Signal::derive(move || vm.form.with(|f| f.requested_to))
                            on_change=move |to| vm.form.update(|f| f.requested_to = to)
                        />
                    </Flex>
                    <FieldError errors=errors field="requested_from" />
                    <FieldError errors=errors field="requested_to" />
                </div>

                <div class="form-group">
                    <label for="reason">{t("request.reason")}</label>
                    <textarea
                        id="reason"
                        rows="3"
                        maxlength=REASON_MAX_LEN.to_string()
                        prop:value=move || vm.form.with(|f| f.reason.clone())
                        on:input=move |ev| vm.form.update(|f| f.reason = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="reason" />
                </div>

                <div class="form-group">
                    <label for="notes">{t("request.notes")}</label>
                    <textarea
                        id="notes"
                        rows="4"
                        prop:value=move || vm.form.with(|f| f.notes.clone().unwrap_or_default())
                        on:input=move |ev| vm.set_notes(event_target_value(&ev))
                    />
                    <div class=move || notes_counter_class(vm.notes_len())>
                        {move || format!("{} / {}", vm.notes_len(), NOTES_MAX_LEN)}
                    </div>
                    <FieldError errors=errors field="notes" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command(on_close)
                    disabled=vm.is_saving
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
    }
}

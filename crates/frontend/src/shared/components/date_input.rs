use crate::shared::date_utils::{date_input_value, parse_date_input};
use chrono::NaiveDate;
use leptos::prelude::*;

/// DateInput component with native date picker.
/// The browser displays the date in the user's locale; an emptied field
/// reports `None`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    on_change: impl Fn(Option<NaiveDate>) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=move || date_input_value(value.get())
            on:change=move |ev| {
                on_change(parse_date_input(&event_target_value(&ev)));
            }
        />
    }
}

use crate::shared::i18n::use_lang;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Inline validation message of one form field
#[component]
pub fn FieldError(
    #[prop(into)]
    errors: Signal<Option<FieldErrors>>,
    field: &'static str,
) -> impl IntoView {
    let lang = use_lang();
    let message = move || {
        errors.with(|e| {
            e.as_ref()
                .and_then(|e| e.for_field(field))
                .map(|err| err.message(lang.get()))
        })
    };

    view! {
        {move || message().map(|m| view! { <div class="form__error">{m}</div> })}
    }
}

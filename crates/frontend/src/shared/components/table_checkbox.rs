use leptos::prelude::*;

/// Table cell with a checkbox, BEM-styled.
///
/// Clicking the checkbox does not click the row (stop_propagation).
/// `indeterminate` renders the mixed state of a partially selected parent.
///
/// # BEM classes
/// - `.table__cell--checkbox` - td wrapper
/// - `.table__checkbox` - input element
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    /// Called with the new checked state
    on_change: Callback<bool>,
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:indeterminate=move || indeterminate.get().unwrap_or(false)
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}

use crate::shared::i18n::{t, use_lang};
use contracts::shared::api_response::ApiError;
use leptos::prelude::*;
use thaw::*;

/// Modal showing a backend error in the current language. Open while
/// `error` holds a value; OK (or closing the dialog) clears it.
#[component]
pub fn ErrorDialog(error: RwSignal<Option<ApiError>>) -> impl IntoView {
    let lang = use_lang();
    let open = RwSignal::new(false);

    Effect::new(move |_| open.set(error.with(Option::is_some)));
    Effect::new(move |_| {
        if !open.get() && error.with_untracked(Option::is_some) {
            error.set(None);
        }
    });

    let message = move || {
        error.with(|e| {
            e.as_ref()
                .map(|e| e.message(lang.get()).to_string())
                .unwrap_or_default()
        })
    };
    let details = move || error.with(|e| e.as_ref().map(|e| e.errors.clone()).unwrap_or_default());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{t("common.error")}</DialogTitle>
                    <DialogContent>
                        <p>{message}</p>
                        <ul class="error-dialog__details">
                            {move || details().into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                        </ul>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| error.set(None)
                        >
                            {t("common.ok")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

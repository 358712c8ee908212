use contracts::shared::i18n::Lang;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub key: String,
    /// Shown after the screen label, e.g. a roster title
    pub detail: Option<String>,
}

/// Parameters mirrored in the address bar
#[derive(Debug, Default, Serialize, Deserialize)]
struct UrlState {
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub lang: RwSignal<Lang>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            lang: RwSignal::new(Lang::default()),
        }
    }

    /// Restores the active screen and language from the query string and keeps
    /// both in sync afterwards. Also keeps `<html dir lang>` in line with the
    /// language.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: UrlState =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(lang) = params.lang.as_deref().and_then(Lang::from_code) {
            self.lang.set(lang);
        }
        if let Some(active_key) = params.active {
            self.open_tab(&active_key, None);
        }

        let this = *self;
        Effect::new(move |_| {
            let lang = this.lang.get();
            let state = UrlState {
                active: this.active.get(),
                lang: Some(lang.code().to_string()),
            };
            let query_string = serde_qs::to_string(&state).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }

            apply_document_direction(lang);
        });
    }

    pub fn open_tab(&self, key: &str, detail: Option<String>) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    detail,
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing unmounts the screen, which cancels its pending work
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_lang(&self) {
        self.lang.update(|lang| {
            *lang = match lang {
                Lang::En => Lang::Ar,
                Lang::Ar => Lang::En,
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_document_direction(lang: Lang) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("dir", lang.dir());
    let _ = root.set_attribute("lang", lang.code());
}

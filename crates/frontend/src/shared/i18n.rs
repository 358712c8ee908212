//! Reactive access to the translation dictionary for views.

use crate::layout::global_context::AppGlobalContext;
use contracts::shared::i18n::{localize, localize_with, Lang};
use leptos::prelude::*;

/// Current UI language
pub fn use_lang() -> Signal<Lang> {
    let ctx = expect_context::<AppGlobalContext>();
    Signal::derive(move || ctx.lang.get())
}

/// Translated text for `key`, re-rendered when the language changes
pub fn t(key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let lang = use_lang();
    move || localize(key, lang.get())
}

/// Like [`t`] with `{name}` placeholders filled in
pub fn t_with(key: &'static str, lang: Lang, args: &[(&str, String)]) -> String {
    localize_with(key, lang, args)
}

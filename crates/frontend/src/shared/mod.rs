pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod i18n;
pub mod icons;
pub mod list_query;
pub mod list_utils;
pub mod selection;

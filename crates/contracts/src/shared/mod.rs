pub mod api_response;
pub mod i18n;
pub mod list_query;
pub mod pagination;
pub mod validation;

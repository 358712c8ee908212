pub mod date_input;
pub mod error_banner;
pub mod error_dialog;
pub mod field_error;
pub mod filter_panel;
pub mod not_found;
pub mod page_header;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod table_checkbox;

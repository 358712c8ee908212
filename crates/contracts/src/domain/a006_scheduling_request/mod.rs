pub mod aggregate;
pub mod filters;
pub mod form;

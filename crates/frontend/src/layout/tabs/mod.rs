//! Tab management
//!
//! - `page`: wrapper showing or hiding one tab's content
//! - `registry`: tab key → screen
//! - `tab_labels`: tab keys and their labels

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{tab_label, tab_label_key};

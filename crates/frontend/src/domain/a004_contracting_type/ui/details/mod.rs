//! Contracting type create/edit form
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ContractingTypeDetails;
pub use view_model::ContractingTypeDetailsVm;

pub mod controller;
pub mod hook;
pub mod persistence;
pub mod query_string;

pub use controller::{FetchTicket, ListModel, ListQueryController};
pub use hook::{use_list_query, ListQuery};

/// Page buttons shown around the current page
pub const VISIBLE_PAGE_BUTTONS: u32 = 5;

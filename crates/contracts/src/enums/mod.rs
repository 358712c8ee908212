pub mod request_status;
pub mod roster_status;
pub mod sort_direction;

pub use request_status::RequestStatus;
pub use roster_status::RosterStatus;
pub use sort_direction::SortDirection;

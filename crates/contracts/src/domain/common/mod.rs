//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod localized_name;

// Re-exports
pub use aggregate_id::AggregateId;
pub(crate) use aggregate_id::numeric_id;
pub(crate) use localized_name::impl_localized_name;
pub use localized_name::LocalizedName;

pub mod hierarchy;
pub mod set_ops;

pub use hierarchy::HierarchicalSelection;

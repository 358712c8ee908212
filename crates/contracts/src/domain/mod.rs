pub mod a001_department;
pub mod a002_shift_hours_type;
pub mod a003_scientific_degree;
pub mod a004_contracting_type;
pub mod a005_roster;
pub mod a006_scheduling_request;
pub mod common;

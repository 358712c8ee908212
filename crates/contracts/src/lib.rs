//! Wire contracts shared between the roster administration front-end and the REST backend.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;

//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::{ListQuery, PageRequest};
pub use response::{Created, CreatedEmpty};

//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: Entities, Value Objects, Domain Services.

pub mod id;
pub mod password;
pub mod product;
pub mod user;

pub use id::EntityId;
pub use password::{Credentials, Password};
pub use product::{Product, ProductInput, ProductResponse, SortDirection};
pub use user::{User, UserResponse};

//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod product_repository;
mod user_repository;

pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

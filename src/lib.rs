//! Product API - product catalogue service with token authentication.
//!
//! Users register, exchange their credentials for a signed bearer token,
//! and use it to manage products over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Identifiers, passwords, users and products
//! - **services**: Token issuance, auth flow and product access flow
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{EntityId, Password, Product, User};
pub use errors::{AppError, AppResult};

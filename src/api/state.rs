//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{AuthService, ProductService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and token verification
    pub auth_service: Arc<dyn AuthService>,
    /// Product CRUD
    pub product_service: Arc<dyn ProductService>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database and config.
    ///
    /// # Errors
    /// Fails when the services cannot be built from the config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let container = Services::from_connection(database.get_connection(), config)?;

        Ok(Self {
            auth_service: container.auth(),
            product_service: container.products(),
            database,
        })
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
            database,
        }
    }
}

//! Service Container - Wires repositories into services.
//!
//! SOLID (DIP): Callers depend on service traits, not implementations.

use std::sync::Arc;

use super::{AuthService, AuthSettings, Authenticator, ProductManager, ProductService, TokenService};
use crate::config::Config;
use crate::domain::Credentials;
use crate::errors::AppResult;
use crate::infra::{ProductStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
        }
    }

    /// Build every service on top of one database connection.
    ///
    /// # Errors
    /// Fails when the configured hash cost is rejected by Argon2.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        let credentials = Credentials::new(config.hash_cost)?;
        let tokens = Arc::new(TokenService::new(config.jwt_secret_bytes()));

        let auth_service = Arc::new(Authenticator::new(
            Arc::new(UserStore::new(db.clone())),
            credentials,
            tokens,
            AuthSettings::from(config),
        )?);
        let product_service = Arc::new(ProductManager::new(Arc::new(ProductStore::new(db))));

        Ok(Self::new(auth_service, product_service))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}

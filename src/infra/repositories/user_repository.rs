//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails on a duplicate email.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find user by email address, `NotFound` when absent
    async fn find_by_email(&self, email: &str) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(user.id.as_uuid()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password.as_str().to_string()),
            created_at: Set(user.created_at),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(User::from)
            .ok_or_not_found()
    }
}

//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{EntityId, Product, SortDirection};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const MAX_SQL_OFFSET: u64 = i64::MAX as u64;

/// Product repository trait for dependency injection.
///
/// Listings are ordered by creation order. Implementations must serialize
/// concurrent writes to the same id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// Return the records in `[page * limit, page * limit + limit)`.
    ///
    /// `page` is 0-indexed. `None` sort uses the default ordering
    /// (ascending creation order).
    async fn find_all(
        &self,
        page: u64,
        limit: u64,
        sort: Option<SortDirection>,
    ) -> AppResult<Vec<Product>>;

    /// Find product by ID, `NotFound` when absent
    async fn find_by_id(&self, id: EntityId) -> AppResult<Product>;

    /// Replace name and price of an existing product
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete product by ID, `NotFound` when absent
    async fn delete(&self, id: EntityId) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: EntityId) -> AppResult<product::Model> {
        ProductEntity::find()
            .filter(product::Column::Id.eq(id.as_uuid()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or_not_found()
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let active_model = ActiveModel {
            seq: NotSet,
            id: Set(product.id.as_uuid()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn find_all(
        &self,
        page: u64,
        limit: u64,
        sort: Option<SortDirection>,
    ) -> AppResult<Vec<Product>> {
        let query = match sort {
            Some(SortDirection::Desc) => {
                ProductEntity::find().order_by_desc(product::Column::Seq)
            }
            Some(SortDirection::Asc) | None => {
                ProductEntity::find().order_by_asc(product::Column::Seq)
            }
        };

        // SQL offsets and limits are signed 64-bit; a window past that holds no rows
        let Some(offset) = page
            .checked_mul(limit)
            .filter(|offset| *offset <= MAX_SQL_OFFSET)
        else {
            return Ok(Vec::new());
        };

        let models = query
            .offset(offset)
            .limit(limit.min(MAX_SQL_OFFSET))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Product> {
        self.find_model(id).await.map(Product::from)
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let existing = self.find_model(product.id).await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(product.name.clone());
        active.price = Set(product.price);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> AppResult<()> {
        let result = ProductEntity::delete_many()
            .filter(product::Column::Id.eq(id.as_uuid()))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

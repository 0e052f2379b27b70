//! Product service - Handles product CRUD use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, Product};
use crate::errors::{AppError, AppResult};
use crate::infra::ProductRepository;
use crate::types::PageRequest;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate and persist a new product
    async fn create(&self, name: String, price: f64) -> AppResult<Product>;

    /// List one page of products
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>>;

    /// Get product by its id string
    async fn get(&self, id: &str) -> AppResult<Product>;

    /// Replace name and price of an existing product
    async fn update(&self, id: &str, name: String, price: f64) -> AppResult<Product>;

    /// Delete an existing product
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    // An id that does not parse cannot name a stored product
    fn parse_id(id: &str) -> AppResult<EntityId> {
        EntityId::parse(id).map_err(|_| AppError::NotFound)
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn create(&self, name: String, price: f64) -> AppResult<Product> {
        let product = Product::new(name, price)?;
        self.products.create(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>> {
        self.products
            .find_all(page.page, page.limit, page.sort)
            .await
    }

    async fn get(&self, id: &str) -> AppResult<Product> {
        let id = Self::parse_id(id)?;
        self.products.find_by_id(id).await
    }

    async fn update(&self, id: &str, name: String, price: f64) -> AppResult<Product> {
        // Reject bad input before touching storage
        Product::new(name.clone(), price)?;

        let mut product = self.get(id).await?;
        product.replace(name, price)?;
        self.products.update(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let product = self.get(id).await?;
        self.products.delete(product.id).await?;

        tracing::info!(product_id = %product.id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortDirection;
    use crate::infra::MockProductRepository;
    use mockall::predicate::eq;

    fn service(repo: MockProductRepository) -> ProductManager {
        ProductManager::new(Arc::new(repo))
    }

    fn existing(name: &str, price: f64) -> Product {
        Product::new(name.to_string(), price).unwrap()
    }

    #[tokio::test]
    async fn test_create_persists_valid_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|p: &Product| p.name == "Keyboard" && p.price == 49.9)
            .times(1)
            .returning(|_| Ok(()));

        let product = service(repo)
            .create("Keyboard".to_string(), 49.9)
            .await
            .unwrap();
        assert_eq!(product.name, "Keyboard");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();
        let service = service(repo);

        for (name, price) in [("", 10.0), ("Mouse", 0.0), ("Mouse", -1.0)] {
            let result = service.create(name.to_string(), price).await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_list_passes_normalized_window() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .with(eq(2u64), eq(5u64), eq(Some(SortDirection::Desc)))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let page = PageRequest::from_raw(Some("2"), Some("5"), Some("desc"));
        let products = service(repo).list(page).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_with_unparsable_id_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().never();

        let result = service(repo).get("not-a-uuid").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let product = existing("Old", 1.0);
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(product.clone()));
        repo.expect_update()
            .withf(move |p: &Product| p.id == id && p.name == "New" && p.price == 2.5)
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(repo)
            .update(&id.to_string(), "New".to_string(), 2.5)
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "New");
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_update().never();

        let result = service(repo)
            .update(&EntityId::new().to_string(), "New".to_string(), 2.5)
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update().never();

        let result = service(repo)
            .update(&EntityId::new().to_string(), "New".to_string(), -3.0)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_checks_existence_first() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_delete().never();

        let result = service(repo).delete(&EntityId::new().to_string()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_product() {
        let product = existing("Gone", 3.0);
        let id = product.id;

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(product.clone()));
        repo.expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete(&id.to_string()).await.is_ok());
    }
}

//! Product repository tests against an in-memory SQLite database.

use product_api::domain::{EntityId, Product, SortDirection};
use product_api::errors::AppError;
use product_api::infra::{Database, ProductRepository, ProductStore};

async fn store() -> ProductStore {
    let db = Database::connect_url("sqlite::memory:")
        .await
        .expect("in-memory database");
    ProductStore::new(db.get_connection())
}

async fn seed(store: &ProductStore, count: usize) -> Vec<Product> {
    let mut products = Vec::with_capacity(count);
    for i in 0..count {
        let product = Product::new(format!("Product {}", i), (i + 1) as f64).unwrap();
        store.create(&product).await.unwrap();
        products.push(product);
    }
    products
}

fn names(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[tokio::test]
async fn test_create_then_find_by_id() {
    let store = store().await;
    let product = Product::new("Keyboard".to_string(), 49.9).unwrap();
    store.create(&product).await.unwrap();

    let found = store.find_by_id(product.id).await.unwrap();
    assert_eq!(found.id, product.id);
    assert_eq!(found.name, "Keyboard");
    assert_eq!(found.price, 49.9);
}

#[tokio::test]
async fn test_find_missing_is_not_found() {
    let store = store().await;
    let result = store.find_by_id(EntityId::new()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_pagination_windows_over_thirteen_products() {
    let store = store().await;
    seed(&store, 13).await;

    let page0 = store.find_all(0, 5, None).await.unwrap();
    let page1 = store.find_all(1, 5, None).await.unwrap();
    let page2 = store.find_all(2, 5, None).await.unwrap();
    let page3 = store.find_all(3, 5, None).await.unwrap();

    assert_eq!(
        names(&page0),
        ["Product 0", "Product 1", "Product 2", "Product 3", "Product 4"]
    );
    assert_eq!(
        names(&page1),
        ["Product 5", "Product 6", "Product 7", "Product 8", "Product 9"]
    );
    assert_eq!(names(&page2), ["Product 10", "Product 11", "Product 12"]);
    assert!(page3.is_empty());
}

#[tokio::test]
async fn test_page_beyond_sql_range_is_empty() {
    let store = store().await;
    seed(&store, 3).await;

    for page in [u64::MAX, 1_000_000_000_000_000_000, i64::MAX as u64] {
        let products = store.find_all(page, 10, None).await.unwrap();
        assert!(products.is_empty(), "page {} should be empty", page);
    }

    let huge_limit = store.find_all(0, u64::MAX, None).await.unwrap();
    assert_eq!(huge_limit.len(), 3);
}

#[tokio::test]
async fn test_descending_sort_reverses_creation_order() {
    let store = store().await;
    seed(&store, 4).await;

    let desc = store
        .find_all(0, 10, Some(SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(
        names(&desc),
        ["Product 3", "Product 2", "Product 1", "Product 0"]
    );

    let asc = store
        .find_all(0, 10, Some(SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(names(&asc), ["Product 0", "Product 1", "Product 2", "Product 3"]);
}

#[tokio::test]
async fn test_update_touches_only_target() {
    let store = store().await;
    let products = seed(&store, 2).await;

    let mut target = products[0].clone();
    target.replace("Renamed".to_string(), 99.0).unwrap();
    store.update(&target).await.unwrap();

    let updated = store.find_by_id(target.id).await.unwrap();
    let untouched = store.find_by_id(products[1].id).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.price, 99.0);
    assert_eq!(untouched.name, "Product 1");
    assert_eq!(untouched.price, 2.0);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = store().await;
    let ghost = Product::new("Ghost".to_string(), 1.0).unwrap();

    let result = store.update(&ghost).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_then_find_and_delete_again() {
    let store = store().await;
    let products = seed(&store, 1).await;
    let id = products[0].id;

    store.delete(id).await.unwrap();

    assert!(matches!(store.find_by_id(id).await, Err(AppError::NotFound)));
    assert!(matches!(store.delete(id).await, Err(AppError::NotFound)));
}

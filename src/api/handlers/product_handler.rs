//! Product handlers. Every route here sits behind the bearer middleware.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{ProductInput, ProductResponse};
use crate::errors::AppResult;
use crate::types::{Created, ListQuery, PageRequest};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> AppResult<Created<ProductResponse>> {
    tracing::debug!(user_id = %user.id, "Creating product");
    let product = state.product_service.create(input.name, input.price).await?;
    Ok(Created(ProductResponse::from(product)))
}

/// List products
///
/// Bad `page`/`limit` values fall back to defaults instead of failing.
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of products", body = Vec<ProductResponse>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state
        .product_service
        .list(PageRequest::from(&query))
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.product_service.get(&id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// Replace a product's name and price
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> AppResult<Json<ProductResponse>> {
    let product = state
        .product_service
        .update(&id, input.name, input.price)
        .await?;

    Ok(Json(ProductResponse::from(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<()> {
    state.product_service.delete(&id).await
}

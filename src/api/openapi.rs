//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{product_handler, user_handler};
use crate::domain::{ProductInput, ProductResponse, SortDirection};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Product API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product API",
        version = "0.1.0",
        description = "Product catalogue CRUD with bearer token authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::register,
        user_handler::generate_token,
        // Product endpoints
        product_handler::create_product,
        product_handler::list_products,
        product_handler::get_product,
        product_handler::update_product,
        product_handler::delete_product,
    ),
    components(
        schemas(
            ProductInput,
            ProductResponse,
            SortDirection,
            user_handler::RegisterRequest,
            user_handler::LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration and token issuance"),
        (name = "Products", description = "Product catalogue operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /users/generate_token"))
                        .build(),
                ),
            );
        }
    }
}

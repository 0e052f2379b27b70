//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::EntityId;
use crate::errors::{AppError, AppResult};

/// Product domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a validated product with a freshly generated id.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank or the price is not
    /// strictly positive.
    pub fn new(name: String, price: f64) -> AppResult<Self> {
        validate(&name, price)?;
        Ok(Self {
            id: EntityId::new(),
            name,
            price,
            created_at: Utc::now(),
        })
    }

    /// Replace all mutable fields (full replace, not a patch).
    ///
    /// # Errors
    /// Same rules as [`Product::new`]; the product is untouched on error.
    pub fn replace(&mut self, name: String, price: f64) -> AppResult<()> {
        validate(&name, price)?;
        self.name = name;
        self.price = price;
        Ok(())
    }
}

fn validate(name: &str, price: f64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("name is required"));
    }
    if price == 0.0 {
        return Err(AppError::validation("price is required"));
    }
    if price < 0.0 || !price.is_finite() {
        return Err(AppError::validation("invalid price"));
    }
    Ok(())
}

/// Sort direction for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `asc`/`desc` case-insensitively; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Product creation / replacement payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    /// Product name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Keyboard")]
    pub name: String,
    /// Unit price, strictly positive
    #[schema(example = 49.9)]
    pub price: f64,
}

/// Product response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Unique product identifier
    #[schema(value_type = String, example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: EntityId,
    /// Product name
    #[schema(example = "Keyboard")]
    pub name: String,
    /// Unit price
    #[schema(example = 49.9)]
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("Product 1".to_string(), 10.0).unwrap();
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn test_name_required() {
        let result = Product::new("  ".to_string(), 10.0);
        assert!(matches!(result, Err(AppError::Validation(m)) if m == "name is required"));
    }

    #[test]
    fn test_price_required() {
        let result = Product::new("Product 1".to_string(), 0.0);
        assert!(matches!(result, Err(AppError::Validation(m)) if m == "price is required"));
    }

    #[test]
    fn test_negative_price() {
        let result = Product::new("Product 1".to_string(), -10.0);
        assert!(matches!(result, Err(AppError::Validation(m)) if m == "invalid price"));
    }

    #[test]
    fn test_nan_price() {
        assert!(Product::new("Product 1".to_string(), f64::NAN).is_err());
        assert!(Product::new("Product 1".to_string(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut product = Product::new("Product 1".to_string(), 10.0).unwrap();
        let id = product.id;
        product.replace("Product 2".to_string(), 20.0).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Product 2");
        assert_eq!(product.price, 20.0);
    }

    #[test]
    fn test_replace_rejects_invalid_without_mutation() {
        let mut product = Product::new("Product 1".to_string(), 10.0).unwrap();
        assert!(product.replace(String::new(), 20.0).is_err());
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("Asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("sideways"), None);
        assert_eq!(SortDirection::parse(""), None);
    }
}

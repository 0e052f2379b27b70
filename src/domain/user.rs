//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{EntityId, Password};

/// User domain entity
///
/// Deliberately not `Serialize`: the outward shape is [`UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub password: Password,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(name: String, email: String, password: Password) -> Self {
        Self {
            id: EntityId::new(),
            name,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(value_type = String, example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: EntityId,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_hash() {
        let user = User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            Password::from_hash("$argon2id$secret-material"),
        );
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["id"], user.id.to_string());
        assert!(!json.to_string().contains("secret-material"));
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}

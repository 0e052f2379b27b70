//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Page size used when the `limit` query value is missing or unparsable
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// First page index (pages are 0-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 0;

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: u64 = 300;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Secret used by debug builds when `JWT_SECRET` is unset
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

// =============================================================================
// Validation
// =============================================================================

/// Default minimum password length requirement
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

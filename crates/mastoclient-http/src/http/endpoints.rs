//! REST endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST /api/v1/apps
pub const APPS: &[&str] = &["api", "v1", "apps"];

/// GET /api/v1/accounts/verify_credentials
pub const VERIFY_CREDENTIALS: &[&str] = &["api", "v1", "accounts", "verify_credentials"];

/// POST /api/v1/statuses
pub const STATUSES: &[&str] = &["api", "v1", "statuses"];

/// POST /oauth/token
pub const OAUTH_TOKEN: &[&str] = &["oauth", "token"];

/// GET /api/v1/accounts/:id
pub fn account(id: &str) -> [&str; 4] {
    ["api", "v1", "accounts", id]
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form body for POST /api/v1/apps.
#[derive(Debug, Serialize)]
pub struct RegisterAppRequest<'a> {
    pub client_name: &'a str,
    pub redirect_uris: &'a str,
    pub scopes: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'a str>,
}

/// Form body for the authorization-code grant on POST /oauth/token.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
}

/// Response from POST /oauth/token.
#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body returned with non-success responses.
///
/// REST endpoints fill only `error`; OAuth endpoints add `error_description`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub error_description: Option<String>,
}

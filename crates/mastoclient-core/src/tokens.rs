//! Secret-bearing credential types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bearer token authorizing requests on behalf of an account.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or persisting
    /// the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no token has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// The client secret issued to a registered application.
///
/// # Security
///
/// - Never logged or displayed in Debug output
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Create a new client secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the secret value for use in OAuth requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no secret has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ClientSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for ClientSecret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

// Hide secret value in Debug output
impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientSecret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("ZA-Yj3aBD8U8Cm7lKUp-lm9O9BmDgdhHzDeqsY8tlL0");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("ZA-Yj3"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn client_secret_hides_value_in_debug() {
        let secret = ClientSecret::new("client_secret_value_here");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("client_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_is_empty() {
        assert!(AccessToken::default().is_empty());
        assert!(ClientSecret::default().is_empty());
        assert!(!AccessToken::new("t").is_empty());
    }
}

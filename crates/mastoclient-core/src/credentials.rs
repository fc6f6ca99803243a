//! Validated credential bundle.

use std::fmt;

use crate::tokens::{AccessToken, ClientSecret};
use crate::types::InstanceUrl;

/// The four credentials a remote client handle is bound to.
///
/// Values of this type are only produced after every field has been checked
/// for presence, so a [`Connector`](crate::traits::Connector) can rely on them
/// being non-empty.
#[derive(Clone)]
pub struct ClientCredentials {
    instance: InstanceUrl,
    client_key: String,
    client_secret: ClientSecret,
    access_token: AccessToken,
}

impl ClientCredentials {
    /// Bundle already validated credentials.
    pub fn new(
        instance: InstanceUrl,
        client_key: impl Into<String>,
        client_secret: ClientSecret,
        access_token: AccessToken,
    ) -> Self {
        Self {
            instance,
            client_key: client_key.into(),
            client_secret,
            access_token,
        }
    }

    pub fn instance(&self) -> &InstanceUrl {
        &self.instance
    }

    /// Returns the OAuth client id.
    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Replace the held access token, e.g. after a code exchange.
    pub fn set_access_token(&mut self, access_token: AccessToken) {
        self.access_token = access_token;
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("instance", &self.instance)
            .field("client_key", &self.client_key)
            .field("client_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

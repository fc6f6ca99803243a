//! HTTP-backed remote client handle.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use mastoclient_core::traits::Mastodon;
use mastoclient_core::{AccessToken, Account, ClientCredentials, Id, Result, Status, Toot};

use crate::http::client::ApiClient;
use crate::http::endpoints::{self, TokenRequest, TokenResponse};

/// A Mastodon client bound to one instance and one set of credentials.
pub struct HttpMastodon {
    client: ApiClient,
    credentials: ClientCredentials,
}

impl HttpMastodon {
    /// Create a handle for the given credentials.
    ///
    /// No request is made until an operation is called.
    pub fn new(credentials: ClientCredentials) -> Result<Self> {
        Self::with_timeout(credentials, None)
    }

    /// Create a handle whose requests give up after `timeout`.
    pub fn with_timeout(credentials: ClientCredentials, timeout: Option<Duration>) -> Result<Self> {
        let client = ApiClient::new(credentials.instance().clone(), timeout)?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Returns the credentials this handle is bound to.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    fn token(&self) -> &str {
        self.credentials.access_token().as_str()
    }
}

#[async_trait]
impl Mastodon for HttpMastodon {
    #[instrument(skip(self), fields(instance = %self.credentials.instance()))]
    async fn get_account(&self, id: &Id) -> Result<Account> {
        debug!("Fetching account");
        self.client
            .get_authed(&endpoints::account(id.as_str()), self.token())
            .await
    }

    #[instrument(skip(self), fields(instance = %self.credentials.instance()))]
    async fn current_account(&self) -> Result<Account> {
        debug!("Verifying credentials");
        self.client
            .get_authed(endpoints::VERIFY_CREDENTIALS, self.token())
            .await
    }

    #[instrument(skip(self, toot), fields(instance = %self.credentials.instance()))]
    async fn post_status(&self, toot: &Toot) -> Result<Status> {
        debug!("Posting status");
        let status: Status = self
            .client
            .post_json_authed(endpoints::STATUSES, toot, self.token())
            .await?;
        debug!(id = %status.id, "Status created");
        Ok(status)
    }

    #[instrument(skip(self, code), fields(instance = %self.credentials.instance()))]
    async fn authenticate_token(&mut self, code: &str, redirect_uri: &str) -> Result<()> {
        info!("Exchanging authorization code");

        let request = TokenRequest {
            grant_type: "authorization_code",
            client_id: self.credentials.client_key(),
            client_secret: self.credentials.client_secret().as_str(),
            code,
            redirect_uri,
        };

        let response: TokenResponse = self
            .client
            .post_form(endpoints::OAUTH_TOKEN, &request)
            .await?;

        self.credentials
            .set_access_token(AccessToken::new(response.access_token));

        debug!("Access token replaced");
        Ok(())
    }

    fn access_token(&self) -> &AccessToken {
        self.credentials.access_token()
    }
}

impl std::fmt::Debug for HttpMastodon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMastodon")
            .field("credentials", &self.credentials)
            .finish()
    }
}

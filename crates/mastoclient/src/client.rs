//! Network operations on a [`Config`].
//!
//! Every operation runs the preflight check, builds a fresh remote client
//! handle, issues exactly one request through it and drops it.

use std::future::Future;

use tracing::instrument::WithSubscriber;
use tracing::{debug, error, instrument};

use mastoclient_core::{AccessToken, Account, Id, Result, StatusId, Toot};

use crate::config::Config;

impl Config {
    /// Fetch a user profile by identifier.
    pub async fn get_user_by_id(&self, id: impl Into<Id>) -> Result<Account> {
        let id = id.into();
        self.with_logger(self.get_user_by_id_inner(&id)).await
    }

    /// Fetch the profile of the account the access token belongs to.
    pub async fn me(&self) -> Result<Account> {
        self.with_logger(self.me_inner()).await
    }

    /// Post a status and return the identifier of the created status.
    ///
    /// A failed request is logged at error level before it is returned.
    pub async fn post(&self, toot: &Toot) -> Result<StatusId> {
        self.with_logger(self.post_inner(toot)).await
    }

    /// Exchange an OAuth authorization code for an access token.
    ///
    /// The returned token is not stored in this configuration; pass it to
    /// [`Config::set_access_token`] to use it for later operations. The
    /// preflight check still applies, so a placeholder access token must be
    /// set before calling this.
    pub async fn authenticate_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken> {
        self.with_logger(self.authenticate_token_inner(code, redirect_uri))
            .await
    }

    #[instrument(skip(self))]
    async fn get_user_by_id_inner(&self, id: &Id) -> Result<Account> {
        let client = self.preflight()?;
        client.get_account(id).await
    }

    #[instrument(skip(self))]
    async fn me_inner(&self) -> Result<Account> {
        let client = self.preflight()?;
        client.current_account().await
    }

    #[instrument(skip(self, toot))]
    async fn post_inner(&self, toot: &Toot) -> Result<StatusId> {
        let client = self.preflight()?;

        match client.post_status(toot).await {
            Ok(status) => {
                debug!(id = %status.id, "Posted status");
                Ok(status.id)
            }
            Err(e) => {
                error!(error = %e, "Failed to post status");
                Err(e)
            }
        }
    }

    #[instrument(skip(self, code))]
    async fn authenticate_token_inner(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<AccessToken> {
        let mut client = self.preflight()?;
        client.authenticate_token(code, redirect_uri).await?;
        Ok(client.access_token().clone())
    }

    /// Run `fut` with the configured logger as the default dispatcher.
    async fn with_logger<F: Future>(&self, fut: F) -> F::Output {
        match &self.logger {
            Some(dispatch) => fut.with_subscriber(dispatch.clone()).await,
            None => fut.await,
        }
    }
}

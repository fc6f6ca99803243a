//! Remote client handle trait.

use async_trait::async_trait;

use crate::model::{Account, Status, Toot};
use crate::tokens::AccessToken;
use crate::types::Id;
use crate::Result;

/// A client bound to one instance and one set of credentials.
///
/// Each method issues exactly one request.
#[async_trait]
pub trait Mastodon: Send + Sync {
    /// Fetch an account by identifier.
    async fn get_account(&self, id: &Id) -> Result<Account>;

    /// Fetch the account the access token belongs to.
    async fn current_account(&self) -> Result<Account>;

    /// Publish a new status.
    async fn post_status(&self, toot: &Toot) -> Result<Status>;

    /// Exchange an authorization code for an access token.
    ///
    /// On success the handle's held access token is replaced.
    async fn authenticate_token(&mut self, code: &str, redirect_uri: &str) -> Result<()>;

    /// Returns the access token the handle currently holds.
    fn access_token(&self) -> &AccessToken;
}

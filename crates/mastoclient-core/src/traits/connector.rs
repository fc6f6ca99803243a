//! Remote client factory trait.

use async_trait::async_trait;

use crate::credentials::ClientCredentials;
use crate::model::{AppRegistration, Application};
use crate::Result;

use super::Mastodon;

/// Builds remote client handles and performs credential-free calls.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Construct a handle bound to validated credentials.
    ///
    /// No network access happens here.
    fn connect(&self, credentials: ClientCredentials) -> Result<Box<dyn Mastodon>>;

    /// Register a new application with the instance named in `registration`.
    async fn register_app(&self, registration: &AppRegistration) -> Result<Application>;
}

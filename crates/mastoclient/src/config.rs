//! Client configuration and the preflight check.

use std::fmt;
use std::sync::Arc;

use tracing::Dispatch;

use mastoclient_core::traits::{Connector, Mastodon};
use mastoclient_core::{
    AccessToken, ClientCredentials, ClientSecret, ConfigError, InstanceUrl, Result,
};
use mastoclient_http::HttpConnector;

/// Environment variable holding the instance URL.
pub const ENV_INSTANCE: &str = "MASTODON_INSTANCE";

/// Environment variable holding the client key.
pub const ENV_CLIENT_KEY: &str = "MASTODON_CLIENT_KEY";

/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "MASTODON_CLIENT_SECRET";

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "MASTODON_ACCESS_TOKEN";

/// Connection and credential settings for talking to one instance.
///
/// Every field may be left empty at construction time; the four credential
/// fields are checked the first time a network operation runs.
///
/// # Example
///
/// ```
/// use mastoclient::{Config, InstanceUrl};
///
/// let config = Config::builder()
///     .instance(InstanceUrl::new("https://mastodon.social").unwrap())
///     .client_key("key")
///     .client_secret("secret")
///     .access_token("token")
///     .build();
/// assert_eq!(config.client_key(), "key");
/// ```
#[derive(Clone)]
pub struct Config {
    pub(crate) instance: Option<InstanceUrl>,
    pub(crate) client_key: String,
    pub(crate) client_secret: ClientSecret,
    pub(crate) access_token: AccessToken,
    pub(crate) logger: Option<Dispatch>,
    pub(crate) connector: Arc<dyn Connector>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance: None,
            client_key: String::new(),
            client_secret: ClientSecret::default(),
            access_token: AccessToken::default(),
            logger: None,
            connector: Arc::new(HttpConnector::default()),
        }
    }
}

impl Config {
    /// An empty configuration using the HTTP connector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read credentials from `MASTODON_*` environment variables.
    ///
    /// Unset variables leave their field empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `MASTODON_INSTANCE` is set but is not a valid
    /// instance URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, using the same
    /// keys as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(instance) = lookup(ENV_INSTANCE).filter(|v| !v.is_empty()) {
            config.instance = Some(InstanceUrl::new(instance)?);
        }
        if let Some(key) = lookup(ENV_CLIENT_KEY) {
            config.client_key = key;
        }
        if let Some(secret) = lookup(ENV_CLIENT_SECRET) {
            config.client_secret = ClientSecret::new(secret);
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            config.access_token = AccessToken::new(token);
        }

        Ok(config)
    }

    pub fn instance(&self) -> Option<&InstanceUrl> {
        self.instance.as_ref()
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn logger(&self) -> Option<&Dispatch> {
        self.logger.as_ref()
    }

    pub fn set_instance(&mut self, instance: InstanceUrl) {
        self.instance = Some(instance);
    }

    pub fn set_client_key(&mut self, client_key: impl Into<String>) {
        self.client_key = client_key.into();
    }

    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.client_secret = ClientSecret::new(client_secret);
    }

    /// Replace the access token, typically with the one returned by
    /// [`Config::authenticate_token`].
    pub fn set_access_token(&mut self, access_token: impl Into<AccessToken>) {
        self.access_token = access_token.into();
    }

    pub fn set_logger(&mut self, logger: impl Into<Dispatch>) {
        self.logger = Some(logger.into());
    }

    pub fn set_connector(&mut self, connector: impl Connector + 'static) {
        self.connector = Arc::new(connector);
    }

    /// Check the credential fields in order and build a remote client handle.
    ///
    /// The connector is not consulted unless every field is present.
    pub(crate) fn preflight(&self) -> Result<Box<dyn Mastodon>> {
        let instance = self.instance.as_ref().ok_or(ConfigError::MissingInstance)?;

        if self.client_key.is_empty() {
            return Err(ConfigError::MissingClientKey.into());
        }

        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingClientSecret.into());
        }

        if self.access_token.is_empty() {
            return Err(ConfigError::MissingAccessToken.into());
        }

        let credentials = ClientCredentials::new(
            instance.clone(),
            self.client_key.clone(),
            self.client_secret.clone(),
            self.access_token.clone(),
        );

        self.connector.connect(credentials)
    }
}

// Custom Debug impl that hides sensitive data
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("instance", &self.instance)
            .field("client_key", &self.client_key)
            .field("client_secret", &self.client_secret)
            .field("access_token", &self.access_token)
            .field("logger", &self.logger.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Config`].
///
/// Setters can be called in any order; calling one twice keeps the last
/// value.
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn instance(mut self, instance: InstanceUrl) -> Self {
        self.config.set_instance(instance);
        self
    }

    pub fn client_key(mut self, client_key: impl Into<String>) -> Self {
        self.config.set_client_key(client_key);
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.config.set_client_secret(client_secret);
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.set_access_token(AccessToken::new(access_token));
        self
    }

    /// Route diagnostics from operations on this configuration to `logger`
    /// instead of the global default.
    pub fn logger(mut self, logger: impl Into<Dispatch>) -> Self {
        self.config.set_logger(logger);
        self
    }

    /// Use a custom connector to build remote client handles.
    pub fn connector(mut self, connector: impl Connector + 'static) -> Self {
        self.config.set_connector(connector);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

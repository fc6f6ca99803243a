//! mastoclient - a configuration-driven Mastodon client wrapper.
//!
//! Build a [`Config`] with the instance and OAuth credentials, then call one
//! of its operations. Each operation checks that the instance, client key,
//! client secret and access token are all set (in that order), builds a
//! fresh client handle and makes a single request.
//!
//! # Example
//!
//! ```no_run
//! use mastoclient::{Config, InstanceUrl, Toot};
//!
//! # async fn example() -> Result<(), mastoclient::Error> {
//! let config = Config::builder()
//!     .instance(InstanceUrl::new("https://mastodon.social")?)
//!     .client_key("client-key")
//!     .client_secret("client-secret")
//!     .access_token("access-token")
//!     .build();
//!
//! let me = config.me().await?;
//! println!("logged in as {}", me.acct);
//!
//! let id = config.post(&Toot::new("hello from mastoclient")).await?;
//! println!("posted {}", id);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod register;

pub use config::{Config, ConfigBuilder};
pub use register::{register_app, register_app_with};

// Re-export core types so callers need a single dependency
pub use mastoclient_core::error;
pub use mastoclient_core::traits::{Connector, Mastodon};
pub use mastoclient_core::{
    AccessToken, Account, AppRegistration, Application, ClientCredentials, ClientSecret,
    ConfigError, Error, Id, InstanceUrl, RegisterAppInput, Result, Status, StatusId, Toot,
    Visibility,
};
pub use mastoclient_http::HttpConnector;

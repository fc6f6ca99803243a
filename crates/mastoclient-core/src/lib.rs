//! mastoclient-core - Core Mastodon types and traits.
//!
//! The [`Connector`] and [`Mastodon`] traits are the seam between the
//! `mastoclient` facade and whichever protocol client performs requests.

pub mod credentials;
pub mod error;
pub mod model;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::ClientCredentials;
pub use error::{ConfigError, Error};
pub use model::{
    Account, AppRegistration, Application, RegisterAppInput, Status, Toot, Visibility,
};
pub use tokens::{AccessToken, ClientSecret};
pub use traits::{Connector, Mastodon};
pub use types::{Id, InstanceUrl, StatusId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

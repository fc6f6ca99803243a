use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::tokens::ClientSecret;
use crate::types::{Id, InstanceUrl};

/// A request to register a new OAuth application with an instance.
///
/// # Example
///
/// ```
/// use mastoclient_core::{InstanceUrl, RegisterAppInput};
///
/// let input = RegisterAppInput::new(
///     InstanceUrl::new("https://mastodon.social").unwrap(),
///     "my-bot",
///     "urn:ietf:wg:oauth:2.0:oob",
/// )
/// .unwrap()
/// .scopes(["read", "write"]);
/// assert_eq!(input.to_registration().scopes, "read write");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAppInput {
    pub instance_url: InstanceUrl,
    pub client_name: String,
    /// Sent exactly as given; the token exchange must repeat it verbatim.
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub website: Option<String>,
}

impl RegisterAppInput {
    /// # Errors
    ///
    /// Returns an error if `redirect_uri` is not an absolute URI.
    pub fn new(
        instance_url: InstanceUrl,
        client_name: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, Error> {
        let redirect_uri = redirect_uri.into();
        if let Err(e) = Url::parse(&redirect_uri) {
            return Err(InvalidInputError::RedirectUri {
                value: redirect_uri,
                reason: e.to_string(),
            }
            .into());
        }

        Ok(Self {
            instance_url,
            client_name: client_name.into(),
            redirect_uri,
            scopes: Vec::new(),
            website: None,
        })
    }

    /// Replace the requested scopes. Order is preserved.
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Flatten into the form sent to the instance.
    ///
    /// Scopes are joined with single spaces in input order; no scopes yield
    /// an empty string.
    pub fn to_registration(&self) -> AppRegistration {
        AppRegistration {
            server: self.instance_url.clone(),
            client_name: self.client_name.clone(),
            redirect_uris: self.redirect_uri.clone(),
            scopes: self.scopes.join(" "),
            website: self.website.clone(),
        }
    }
}

/// Registration parameters as handed to a [`Connector`](crate::traits::Connector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRegistration {
    pub server: InstanceUrl,
    pub client_name: String,
    pub redirect_uris: String,
    pub scopes: String,
    pub website: Option<String>,
}

impl AppRegistration {
    /// The URL a user visits to authorize the registered application.
    pub fn auth_uri(&self, client_id: &str) -> String {
        let mut url = self.server.endpoint(&["oauth", "authorize"]);
        url.query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uris)
            .append_pair("scope", &self.scopes);
        url.to_string()
    }
}

/// A registered application and its OAuth client credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: Option<Id>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub redirect_uri: String,

    /// The new client key.
    pub client_id: String,

    pub client_secret: ClientSecret,

    /// Authorization URL for this application; filled in locally after
    /// registration.
    #[serde(default)]
    pub auth_uri: String,
}

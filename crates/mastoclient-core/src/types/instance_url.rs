//! Instance URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated Mastodon instance URL.
///
/// The URL must be absolute and use HTTP or HTTPS. A trailing slash is
/// ignored when building endpoint URLs.
///
/// # Example
///
/// ```
/// use mastoclient_core::InstanceUrl;
///
/// let instance = InstanceUrl::new("https://mastodon.social/").unwrap();
/// assert_eq!(instance.base(), "https://mastodon.social");
/// assert_eq!(instance.endpoint(&["api", "v1", "apps"]).as_str(),
///            "https://mastodon.social/api/v1/apps");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InstanceUrl(Url);

impl InstanceUrl {
    /// Create a new instance URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::InstanceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_url(url)
    }

    /// Wrap an already parsed URL, validating it.
    pub fn from_url(url: Url) -> Result<Self, Error> {
        Self::validate(&url)?;
        Ok(Self(url))
    }

    /// Returns the base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the URL of an endpoint below the instance base.
    ///
    /// Each segment is percent-encoded, so identifiers can be passed as-is.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Validated URLs can always be a base, so this never fails.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url) -> Result<(), Error> {
        let original = url.as_str();

        if url.cannot_be_a_base() {
            return Err(InvalidInputError::InstanceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Self-hosted instances may run without TLS
        if !matches!(url.scheme(), "https" | "http") {
            return Err(InvalidInputError::InstanceUrl {
                value: original.to_string(),
                reason: "must use HTTP or HTTPS".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::InstanceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::InstanceUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for InstanceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())
    }
}

impl FromStr for InstanceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<Url> for InstanceUrl {
    type Error = Error;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        Self::from_url(url)
    }
}

impl Serialize for InstanceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.base())
    }
}

impl<'de> Deserialize<'de> for InstanceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        InstanceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for InstanceUrl {
    fn as_ref(&self) -> &str {
        self.base()
    }
}

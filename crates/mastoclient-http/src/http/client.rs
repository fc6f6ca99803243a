//! REST HTTP client implementation.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};
use url::Url;

use mastoclient_core::InstanceUrl;
use mastoclient_core::Result;
use mastoclient_core::error::{Error, ProtocolError, TransportError};

use super::endpoints::ErrorResponse;

/// HTTP client for Mastodon REST requests against one instance.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    instance: InstanceUrl,
}

impl ApiClient {
    /// Create a new client for the given instance.
    pub(crate) fn new(instance: InstanceUrl, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("mastoclient/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;

        Ok(Self { client, instance })
    }

    /// Make an authenticated GET request.
    #[instrument(skip(self, token), fields(instance = %self.instance))]
    pub(crate) async fn get_authed<R>(&self, segments: &[&str], token: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(segments);
        debug!(%url, "authenticated GET");

        let request = self.client.get(url).bearer_auth(token);
        self.send(request).await
    }

    /// Make an authenticated POST with a JSON body.
    #[instrument(skip(self, body, token), fields(instance = %self.instance))]
    pub(crate) async fn post_json_authed<B, R>(
        &self,
        segments: &[&str],
        body: &B,
        token: &str,
    ) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.url(segments);
        debug!(%url, "authenticated POST");
        trace!(?body, "request body");

        let request = self.client.post(url).json(body).bearer_auth(token);
        self.send(request).await
    }

    /// Make an unauthenticated POST with a form-encoded body.
    ///
    /// Used for the OAuth endpoints, which identify the caller through the
    /// client credentials in the body instead of a bearer token.
    #[instrument(skip(self, form), fields(instance = %self.instance))]
    pub(crate) async fn post_form<F, R>(&self, segments: &[&str], form: &F) -> Result<R>
    where
        F: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(segments);
        debug!(%url, "form POST");

        let request = self.client.post(url).form(form);
        self.send(request).await
    }

    fn url(&self, segments: &[&str]) -> Url {
        self.instance.endpoint(segments)
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let response = request.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport_error)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Parse an error response body, if it has the usual shape.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error, body.error_description),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}

/// Classify a reqwest failure.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_segments() {
        let instance = InstanceUrl::new("https://mastodon.social/").unwrap();
        let client = ApiClient::new(instance, Some(Duration::from_secs(5))).unwrap();
        assert_eq!(
            client.url(&["api", "v1", "statuses"]).as_str(),
            "https://mastodon.social/api/v1/statuses"
        );
    }
}

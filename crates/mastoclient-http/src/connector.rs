//! HTTP connector.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use mastoclient_core::traits::{Connector, Mastodon};
use mastoclient_core::{AppRegistration, Application, ClientCredentials, Result};

use crate::http::client::ApiClient;
use crate::http::endpoints::{self, RegisterAppRequest};
use crate::mastodon::HttpMastodon;

/// Builds [`HttpMastodon`] handles.
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    timeout: Option<Duration>,
}

impl HttpConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a per-request timeout to every handle this connector builds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Connector for HttpConnector {
    fn connect(&self, credentials: ClientCredentials) -> Result<Box<dyn Mastodon>> {
        Ok(Box::new(HttpMastodon::with_timeout(credentials, self.timeout)?))
    }

    #[instrument(skip(self), fields(instance = %registration.server))]
    async fn register_app(&self, registration: &AppRegistration) -> Result<Application> {
        info!(client_name = %registration.client_name, "Registering application");

        let client = ApiClient::new(registration.server.clone(), self.timeout)?;

        let request = RegisterAppRequest {
            client_name: &registration.client_name,
            redirect_uris: &registration.redirect_uris,
            scopes: &registration.scopes,
            website: registration.website.as_deref(),
        };

        let mut app: Application = client.post_form(endpoints::APPS, &request).await?;
        app.auth_uri = registration.auth_uri(&app.client_id);

        debug!(client_id = %app.client_id, "Application registered");
        Ok(app)
    }
}

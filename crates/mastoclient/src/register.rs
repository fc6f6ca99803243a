//! Application registration.

use tracing::instrument;

use mastoclient_core::traits::Connector;
use mastoclient_core::{Application, RegisterAppInput, Result};
use mastoclient_http::HttpConnector;

/// Register a new application with the instance named in `input`.
///
/// No [`Config`](crate::Config) is involved; the returned application carries
/// the new client key and secret to build one with.
///
/// # Example
///
/// ```no_run
/// use mastoclient::{InstanceUrl, RegisterAppInput};
///
/// # async fn example() -> Result<(), mastoclient::Error> {
/// let input = RegisterAppInput::new(
///     InstanceUrl::new("https://mastodon.social")?,
///     "my-bot",
///     "urn:ietf:wg:oauth:2.0:oob",
/// )?
/// .scopes(["read", "write"]);
///
/// let app = mastoclient::register_app(&input).await?;
/// println!("visit {} to authorize", app.auth_uri);
/// # Ok(())
/// # }
/// ```
pub async fn register_app(input: &RegisterAppInput) -> Result<Application> {
    register_app_with(&HttpConnector::default(), input).await
}

/// Register an application through a specific connector.
#[instrument(skip(connector, input), fields(instance = %input.instance_url))]
pub async fn register_app_with(
    connector: &dyn Connector,
    input: &RegisterAppInput,
) -> Result<Application> {
    connector.register_app(&input.to_registration()).await
}

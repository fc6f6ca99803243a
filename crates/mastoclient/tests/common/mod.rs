//! Shared test doubles for the facade tests.

#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use mastoclient::error::ProtocolError;
use mastoclient::{
    AccessToken, Account, AppRegistration, Application, ClientCredentials, Config, ConfigBuilder,
    Connector, Error, Id, InstanceUrl, Mastodon, Result, Status, Toot,
};

/// Everything the fake connector and its handles observed.
#[derive(Default)]
pub struct Calls {
    connects: AtomicUsize,
    requests: AtomicUsize,
    registrations: Mutex<Vec<AppRegistration>>,
    credentials: Mutex<Vec<ClientCredentials>>,
}

impl Calls {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn registrations(&self) -> Vec<AppRegistration> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn last_credentials(&self) -> Option<ClientCredentials> {
        self.credentials.lock().unwrap().last().cloned()
    }
}

/// A connector whose handles answer from fixtures and count their calls.
#[derive(Clone, Default)]
pub struct FakeConnector {
    pub calls: Arc<Calls>,
    fail_status: Option<u16>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every remote call fail with this HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            calls: Arc::default(),
            fail_status: Some(status),
        }
    }
}

#[async_trait]
impl Connector for FakeConnector {
    fn connect(&self, credentials: ClientCredentials) -> Result<Box<dyn Mastodon>> {
        self.calls.connects.fetch_add(1, Ordering::SeqCst);
        self.calls
            .credentials
            .lock()
            .unwrap()
            .push(credentials.clone());

        Ok(Box::new(FakeMastodon {
            calls: self.calls.clone(),
            fail_status: self.fail_status,
            access_token: credentials.access_token().clone(),
        }))
    }

    async fn register_app(&self, registration: &AppRegistration) -> Result<Application> {
        self.calls.requests.fetch_add(1, Ordering::SeqCst);
        self.calls
            .registrations
            .lock()
            .unwrap()
            .push(registration.clone());

        if let Some(status) = self.fail_status {
            return Err(remote_error(status));
        }

        Ok(serde_json::from_value(json!({
            "id": "1",
            "name": registration.client_name,
            "redirect_uri": registration.redirect_uris,
            "client_id": "registered-key",
            "client_secret": "registered-secret"
        }))
        .unwrap())
    }
}

struct FakeMastodon {
    calls: Arc<Calls>,
    fail_status: Option<u16>,
    access_token: AccessToken,
}

impl FakeMastodon {
    fn record(&self) -> Result<()> {
        self.calls.requests.fetch_add(1, Ordering::SeqCst);
        match self.fail_status {
            Some(status) => Err(remote_error(status)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Mastodon for FakeMastodon {
    async fn get_account(&self, id: &Id) -> Result<Account> {
        self.record()?;
        Ok(account(id.as_str()))
    }

    async fn current_account(&self) -> Result<Account> {
        self.record()?;
        Ok(account("me"))
    }

    async fn post_status(&self, toot: &Toot) -> Result<Status> {
        self.record()?;
        Ok(serde_json::from_value(json!({
            "id": "status-1",
            "created_at": "2023-01-15T10:05:00Z",
            "content": toot.status,
            "visibility": "public"
        }))
        .unwrap())
    }

    async fn authenticate_token(&mut self, code: &str, _redirect_uri: &str) -> Result<()> {
        self.record()?;
        self.access_token = AccessToken::new(format!("exchanged-{}", code));
        Ok(())
    }

    fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

pub fn remote_error(status: u16) -> Error {
    Error::Protocol(ProtocolError::new(status, Some("boom".to_string()), None))
}

pub fn account(id: &str) -> Account {
    serde_json::from_value(json!({
        "id": id,
        "username": id,
        "acct": id,
        "created_at": "2023-01-15T10:00:00Z"
    }))
    .unwrap()
}

pub fn instance(url: &str) -> InstanceUrl {
    InstanceUrl::new(url).unwrap()
}

/// A builder with all four credential fields set.
pub fn full_builder(connector: &FakeConnector) -> ConfigBuilder {
    Config::builder()
        .instance(instance("https://mastodon.example"))
        .client_key("client-key")
        .client_secret("client-secret")
        .access_token("access-token")
        .connector(connector.clone())
}

/// An in-memory log sink for a `tracing_subscriber` fmt layer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Build a dispatcher writing INFO and above to `logs`.
pub fn capturing_dispatch(logs: &CapturedLogs) -> tracing::Dispatch {
    let logs = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::Dispatch::new(subscriber)
}

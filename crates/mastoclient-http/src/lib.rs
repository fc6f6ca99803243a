//! mastoclient-http - reqwest-backed Mastodon client.
//!
//! [`HttpConnector`] builds [`HttpMastodon`] handles that talk to the
//! Mastodon REST API over HTTPS.

mod connector;
mod http;
mod mastodon;

pub use connector::HttpConnector;
pub use mastodon::HttpMastodon;

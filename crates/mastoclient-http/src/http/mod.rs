//! HTTP transport for the Mastodon REST API.

pub(crate) mod client;
pub(crate) mod endpoints;

//! Traits forming the boundary between the facade and a protocol client.

mod connector;
mod mastodon;

pub use connector::Connector;
pub use mastodon::Mastodon;

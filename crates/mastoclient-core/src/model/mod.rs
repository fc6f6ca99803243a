//! Mastodon API entities.
//!
//! Only the fields the wrapper's operations read or return are modelled;
//! unknown fields in responses are ignored.

mod account;
mod application;
mod status;

pub use account::Account;
pub use application::{AppRegistration, Application, RegisterAppInput};
pub use status::{Status, Toot, Visibility};

//! Core Mastodon types.
//!
//! These types enforce their invariants at construction time.

mod id;
mod instance_url;

pub use id::{Id, StatusId};
pub use instance_url::InstanceUrl;

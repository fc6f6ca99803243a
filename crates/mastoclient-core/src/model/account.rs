use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Id;

/// A user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Id,

    /// The username, without the instance domain.
    pub username: String,

    /// `username` for local accounts, `username@domain` for remote ones.
    pub acct: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub bot: bool,

    pub created_at: DateTime<Utc>,

    /// Profile bio as HTML.
    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default)]
    pub header: String,

    #[serde(default)]
    pub followers_count: u64,

    #[serde(default)]
    pub following_count: u64,

    #[serde(default)]
    pub statuses_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_api_payload() {
        let account: Account = serde_json::from_value(json!({
            "id": "23634",
            "username": "noiob",
            "acct": "noiob@awoo.space",
            "display_name": "ikea shark fan account",
            "locked": false,
            "bot": false,
            "created_at": "2017-02-08T02:00:53.274Z",
            "note": "<p>:ms_rainbow_flag:​</p>",
            "url": "https://awoo.space/@noiob",
            "avatar": "https://files.mastodon.social/accounts/avatars/000/023/634/original/6ca8804dc46800ad.png",
            "header": "https://files.mastodon.social/accounts/headers/000/023/634/original/256eb8d7ac40f49a.png",
            "followers_count": 547,
            "following_count": 404,
            "statuses_count": 28468,
            "emojis": [],
            "fields": []
        }))
        .unwrap();

        assert_eq!(account.id.as_str(), "23634");
        assert_eq!(account.acct, "noiob@awoo.space");
        assert_eq!(account.followers_count, 547);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let account: Account = serde_json::from_value(json!({
            "id": "1",
            "username": "alice",
            "acct": "alice",
            "created_at": "2022-11-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(account.display_name, "");
        assert_eq!(account.statuses_count, 0);
    }
}

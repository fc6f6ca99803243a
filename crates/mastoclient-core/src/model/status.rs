use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Who can see a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    Direct,
    /// A server-specific level, such as `local` on Pleroma and glitch-soc.
    #[serde(other)]
    Unknown,
}

/// The content of a status to be posted.
///
/// # Example
///
/// ```
/// use mastoclient_core::{Toot, Visibility};
///
/// let toot = Toot::new("hello fediverse")
///     .visibility(Visibility::Unlisted)
///     .spoiler_text("greetings");
/// assert_eq!(toot.status, "hello fediverse");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toot {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_ids: Vec<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoiler_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// ISO 639 language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Toot {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub fn in_reply_to(mut self, id: impl Into<Id>) -> Self {
        self.in_reply_to_id = Some(id.into());
        self
    }

    pub fn media(mut self, id: impl Into<Id>) -> Self {
        self.media_ids.push(id.into());
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = Some(sensitive);
        self
    }

    pub fn spoiler_text(mut self, text: impl Into<String>) -> Self {
        self.spoiler_text = Some(text.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A posted status, as returned by the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: Id,

    #[serde(default)]
    pub uri: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Rendered HTML content.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub visibility: Option<Visibility>,

    #[serde(default)]
    pub sensitive: bool,

    #[serde(default)]
    pub spoiler_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toot_omits_unset_fields() {
        let toot = Toot::new("hello");
        assert_eq!(serde_json::to_value(&toot).unwrap(), json!({"status": "hello"}));
    }

    #[test]
    fn toot_serializes_options() {
        let toot = Toot::new("re: hello")
            .in_reply_to("103704874086360371")
            .media("22348641")
            .sensitive(true)
            .visibility(Visibility::Direct)
            .language("en");

        assert_eq!(
            serde_json::to_value(&toot).unwrap(),
            json!({
                "status": "re: hello",
                "in_reply_to_id": "103704874086360371",
                "media_ids": ["22348641"],
                "sensitive": true,
                "visibility": "direct",
                "language": "en"
            })
        );
    }

    #[test]
    fn status_deserializes() {
        let status: Status = serde_json::from_value(json!({
            "id": "103270115826048975",
            "uri": "https://mastodon.social/users/Gargron/statuses/103270115826048975",
            "url": "https://mastodon.social/@Gargron/103270115826048975",
            "created_at": "2019-12-08T03:48:33.901Z",
            "content": "<p>hello</p>",
            "visibility": "public",
            "sensitive": false,
            "spoiler_text": ""
        }))
        .unwrap();

        assert_eq!(status.id.as_str(), "103270115826048975");
        assert_eq!(status.visibility, Some(Visibility::Public));
        assert!(status.created_at.is_some());
    }

    #[test]
    fn status_tolerates_server_extensions() {
        let status: Status = serde_json::from_value(json!({
            "id": "AbCdEf123",
            "content": "<p>local only</p>",
            "visibility": "local"
        }))
        .unwrap();

        assert_eq!(status.id.as_str(), "AbCdEf123");
        assert_eq!(status.visibility, Some(Visibility::Unknown));
        assert_eq!(status.created_at, None);
    }
}

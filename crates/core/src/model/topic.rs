use serde::{Deserialize, Deserializer, Serialize};

use super::ids::TopicId;
use super::media::{MediaRef, optional_media};

/// A learning unit as served by `GET /api/topics/{id}/`.
///
/// Read-only on the client: the only mutation is the one-way completion
/// report, and completion itself is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default, alias = "video_url", deserialize_with = "optional_media")]
    pub video_file: Option<MediaRef>,
    #[serde(default, deserialize_with = "optional_media")]
    pub ppt_file: Option<MediaRef>,
    #[serde(default, alias = "content", deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub order: Option<u32>,
}

impl Topic {
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_file.is_some()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

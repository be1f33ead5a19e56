use campus_core::model::{MediaRef, Topic, TopicId};
use services::CatalogService;

use crate::views::ViewError;

/// Everything the topic page renders, with media already resolved to URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDetailVm {
    pub id: TopicId,
    pub title: String,
    /// Absent when the topic has no video or its reference cannot be resolved.
    pub video_src: Option<String>,
    pub presentation_href: Option<String>,
    pub description: String,
}

impl TopicDetailVm {
    #[must_use]
    pub fn from_topic(topic: &Topic, catalog: &CatalogService) -> Self {
        let resolve = |media: &MediaRef| {
            catalog.resolve_media(media).map(|url| url.to_string())
        };
        Self {
            id: topic.id,
            title: topic.title.clone(),
            video_src: topic.video_file.as_ref().and_then(resolve),
            presentation_href: topic.ppt_file.as_ref().and_then(resolve),
            description: topic.description.clone(),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::TopicUnavailable` for any failure; the cause is logged.
pub async fn load_topic(catalog: &CatalogService, id: TopicId) -> Result<TopicDetailVm, ViewError> {
    match catalog.get_topic(id).await {
        Ok(topic) => Ok(TopicDetailVm::from_topic(&topic, catalog)),
        Err(err) => {
            tracing::error!(topic = %id, error = %err, "error loading topic");
            Err(ViewError::TopicUnavailable)
        }
    }
}

/// Report the topic as completed. Failures are logged and otherwise ignored.
pub async fn report_completion(catalog: &CatalogService, id: TopicId) {
    if let Err(err) = catalog.mark_completed(id).await {
        tracing::error!(topic = %id, error = %err, "error marking topic as complete");
    }
}

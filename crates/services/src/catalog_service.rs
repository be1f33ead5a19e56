use std::sync::Arc;

use campus_core::model::{Course, CourseId, MediaRef, Topic, TopicId};
use url::Url;

use crate::error::CatalogError;
use crate::transport::TransportClient;

pub const COURSES_PATH: &str = "/api/courses/";

fn topic_path(id: TopicId) -> String {
    format!("/api/topics/{}/", id.value())
}

fn mark_completed_path(id: TopicId) -> String {
    format!("/api/topics/{}/mark_completed/", id.value())
}

/// Read access to courses and topics plus completion reporting.
#[derive(Clone)]
pub struct CatalogService {
    transport: Arc<TransportClient>,
}

impl CatalogService {
    #[must_use]
    pub fn new(transport: Arc<TransportClient>) -> Self {
        Self { transport }
    }

    /// Courses visible to the signed-in student, with their progress.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the request fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let courses: Vec<Course> = self.transport.get_json(COURSES_PATH).await?;
        tracing::debug!(count = courses.len(), "courses loaded");
        Ok(courses)
    }

    /// A single course, taken from the listing (the backend has no detail endpoint).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CourseNotFound` if the listing does not contain it.
    pub async fn get_course(&self, id: CourseId) -> Result<Course, CatalogError> {
        self.list_courses()
            .await?
            .into_iter()
            .find(|course| course.id == id)
            .ok_or(CatalogError::CourseNotFound(id))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the request fails or the body is not a topic.
    pub async fn get_topic(&self, id: TopicId) -> Result<Topic, CatalogError> {
        Ok(self.transport.get_json(&topic_path(id)).await?)
    }

    /// Tell the backend the student finished the topic's video.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the request fails.
    pub async fn mark_completed(&self, id: TopicId) -> Result<(), CatalogError> {
        self.transport.post_empty(&mark_completed_path(id)).await?;
        tracing::info!(topic = %id, "topic marked completed");
        Ok(())
    }

    /// Absolute URL for a topic's media file.
    #[must_use]
    pub fn resolve_media(&self, media: &MediaRef) -> Option<Url> {
        self.transport.config().resolve_media(media)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CourseId, TopicId};
use super::topic::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "6-8")]
    Middle,
    #[serde(rename = "9-12")]
    Senior,
}

impl ClassLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Middle => "Classes 6-8",
            Self::Senior => "Classes 9-12",
        }
    }
}

/// The signed-in student's progress in one course, as computed by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Percentage in `[0, 100]`.
    #[serde(default)]
    pub overall_progress: f64,
    #[serde(default)]
    pub completed_topics: Vec<TopicId>,
}

impl CourseProgress {
    #[must_use]
    pub fn is_completed(&self, topic: TopicId) -> bool {
        self.completed_topics.contains(&topic)
    }

    /// Progress as a whole percentage, clamped for display.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if !self.overall_progress.is_finite() {
            return 0;
        }
        // clamped to [0, 100] so the cast is lossless
        self.overall_progress.clamp(0.0, 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub class_level: Option<ClassLevel>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub progress: Option<CourseProgress>,
}

impl Course {
    /// Topics in curriculum order; topics without an order keep their
    /// relative position at the end.
    #[must_use]
    pub fn ordered_topics(&self) -> Vec<&Topic> {
        let mut topics: Vec<&Topic> = self.topics.iter().collect();
        topics.sort_by_key(|topic| topic.order.unwrap_or(u32::MAX));
        topics
    }

    #[must_use]
    pub fn is_topic_completed(&self, topic: TopicId) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|progress| progress.is_completed(topic))
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress.as_ref().map_or(0, CourseProgress::percent)
    }
}

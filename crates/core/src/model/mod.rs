mod course;
mod ids;
mod media;
mod phone;
mod topic;
mod user;

pub use course::{ClassLevel, Course, CourseProgress};
pub use ids::{CourseId, ParseIdError, TopicId, UserId};
pub use media::MediaRef;
pub use phone::PhoneNumber;
pub use topic::Topic;
pub use user::{Role, Session, User};

use thiserror::Error;

/// Client-side input that can never be sent to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a phone number.")]
    EmptyPhone,

    #[error("Media reference cannot be empty.")]
    EmptyMediaRef,

    #[error("Media reference `{0}` cannot be resolved.")]
    UnresolvableMediaRef(String),
}

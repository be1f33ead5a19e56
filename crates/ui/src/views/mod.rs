mod course;
mod courses;
mod guard;
mod login;
mod state;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course::CourseView;
pub use courses::CoursesView;
pub use guard::RequireSession;
pub use login::LoginView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic::TopicView;

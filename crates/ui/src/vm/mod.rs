mod course_vm;
mod topic_vm;

pub use course_vm::{
    CourseCardVm, CourseDetailVm, TopicRowVm, map_course_cards, map_course_detail,
};
pub use topic_vm::{TopicDetailVm, load_topic, report_completion};

use campus_core::model::{Course, CourseId, TopicId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub class_label: Option<&'static str>,
    pub progress_percent: u8,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            class_label: course.class_level.map(|level| level.label()),
            progress_percent: course.progress_percent(),
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub id: TopicId,
    pub title: String,
    pub completed: bool,
    pub has_video: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub card: CourseCardVm,
    pub topics: Vec<TopicRowVm>,
}

#[must_use]
pub fn map_course_detail(course: &Course) -> CourseDetailVm {
    let topics = course
        .ordered_topics()
        .into_iter()
        .map(|topic| TopicRowVm {
            id: topic.id,
            title: topic.title.clone(),
            completed: course.is_topic_completed(topic.id),
            has_video: topic.has_video(),
        })
        .collect();

    CourseDetailVm {
        card: CourseCardVm::from(course),
        topics,
    }
}

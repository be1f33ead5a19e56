use campus_core::model::CourseId;
use dioxus::prelude::*;
use dioxus_router::Link;
use services::CatalogError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseDetailVm, TopicRowVm, map_course_detail};

#[component]
pub fn CourseView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let course_id = CourseId::new(course_id);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            match catalog.get_course(course_id).await {
                Ok(course) => Ok(map_course_detail(&course)),
                Err(CatalogError::CourseNotFound(_)) => Err(ViewError::CourseNotFound),
                Err(err) => {
                    tracing::error!(course = %course_id, error = %err, "error loading course");
                    Err(ViewError::Unknown)
                }
            }
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(detail) => rsx! {
                    CourseDetail { detail }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    Link { to: Route::Courses {}, "Back to courses" }
                },
            }
        }
    }
}

#[component]
fn CourseDetail(detail: CourseDetailVm) -> Element {
    let card = &detail.card;

    rsx! {
        h2 { "{card.title}" }
        if let Some(label) = card.class_label {
            span { class: "course-level", "{label}" }
        }
        p { class: "course-description", "{card.description}" }
        p { class: "course-progress", "Progress: {card.progress_percent}%" }

        if detail.topics.is_empty() {
            p { "No topics in this course yet." }
        } else {
            ol { class: "topic-list",
                for row in detail.topics.clone() {
                    TopicRow { key: "{row.id}", row }
                }
            }
        }
    }
}

#[component]
fn TopicRow(row: TopicRowVm) -> Element {
    let class = if row.completed {
        "topic-row topic-row--done"
    } else {
        "topic-row"
    };

    rsx! {
        li { class,
            Link { to: Route::Topic { topic_id: row.id.value() }, "{row.title}" }
            if row.has_video {
                span { class: "topic-row__media", "Video" }
            }
            if row.completed {
                span { class: "topic-row__marker", "Completed" }
            }
        }
    }
}

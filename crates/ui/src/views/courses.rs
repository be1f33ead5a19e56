use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let courses = catalog.list_courses().await.map_err(|err| {
                tracing::error!(error = %err, "error loading courses");
                ViewError::Unknown
            })?;
            Ok(map_course_cards(&courses))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Available Courses" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses available yet." }
                    } else {
                        ul { class: "course-grid",
                            for card in cards {
                                CourseCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            h3 { "{card.title}" }
            if let Some(label) = card.class_label {
                span { class: "course-level", "{label}" }
            }
            p { class: "course-description", "{card.description}" }
            p { class: "course-progress", "Progress: {card.progress_percent}%" }
            Link {
                class: "btn btn-primary",
                to: Route::Course { course_id: card.id.value() },
                "Start Learning"
            }
        }
    }
}

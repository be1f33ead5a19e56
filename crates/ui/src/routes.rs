use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::views::{CourseView, CoursesView, LoginView, RequireSession, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[layout(Shell)]
        #[route("/", CoursesView)] Courses {},
        #[route("/courses/:course_id", CoursePage)] Course { course_id: u64 },
        #[route("/topics/:topic_id", TopicPage)] Topic { topic_id: u64 },
}

#[component]
fn Shell() -> Element {
    rsx! {
        RequireSession {
            div { class: "app",
                Sidebar {}
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn CoursePage(course_id: u64) -> Element {
    rsx! {
        CourseView { key: "{course_id}", course_id }
    }
}

/// A new topic id is a new page: fetch state and player start over.
#[component]
fn TopicPage(topic_id: u64) -> Element {
    rsx! {
        TopicView { key: "{topic_id}", topic_id }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let user_name = ctx
        .gate()
        .session()
        .map(|session| session.user().display_name().to_string())
        .unwrap_or_default();
    let auth = ctx.auth();

    rsx! {
        nav { class: "sidebar",
            h1 { "Campus" }
            p { class: "sidebar-user", "{user_name}" }
            ul {
                li { Link { to: Route::Courses {}, "Courses" } }
            }
            button {
                class: "btn btn-secondary sidebar-logout",
                r#type: "button",
                onclick: move |_| {
                    let auth = auth.clone();
                    spawn(async move {
                        auth.logout().await;
                        let _ = navigator.replace(Route::Login {});
                    });
                },
                "Logout"
            }
        }
    }
}

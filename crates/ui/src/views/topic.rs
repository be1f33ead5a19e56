use campus_core::model::TopicId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::player::VideoPlayer;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{TopicDetailVm, load_topic, report_completion};

#[component]
pub fn TopicView(topic_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let topic_id = TopicId::new(topic_id);
    let progress = use_signal(|| 0.0_f64);

    let resource = {
        let catalog = catalog.clone();
        use_resource(move || {
            let catalog = catalog.clone();
            async move { load_topic(&catalog, topic_id).await }
        })
    };
    let state = view_state_from_resource(&resource);

    let on_complete = use_callback(move |()| {
        let catalog = catalog.clone();
        spawn(async move {
            report_completion(&catalog, topic_id).await;
        });
    });

    rsx! {
        div { class: "page topic",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "alert alert-error",
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
                    }
                },
                ViewState::Ready(topic) => rsx! {
                    TopicContent { topic, progress, on_complete }
                },
            }
        }
    }
}

#[component]
fn TopicContent(
    topic: TopicDetailVm,
    progress: Signal<f64>,
    on_complete: Callback<()>,
) -> Element {
    let percent = (progress() * 100.0).round();

    rsx! {
        article { class: "topic-detail",
            h2 { class: "topic-title", "{topic.title}" }

            if let Some(src) = topic.video_src.clone() {
                section { class: "topic-video",
                    VideoPlayer {
                        key: "{src}",
                        source: src.clone(),
                        on_progress: move |fraction: f64| {
                            let mut progress = progress;
                            progress.set(fraction);
                        },
                        on_complete,
                    }
                    div {
                        class: "progress-bar",
                        role: "progressbar",
                        aria_valuemin: "0",
                        aria_valuemax: "100",
                        aria_valuenow: "{percent}",
                        div { class: "progress-bar__fill", style: "width: {percent}%" }
                    }
                }
            }

            if let Some(href) = topic.presentation_href.clone() {
                section { class: "topic-presentation",
                    h3 { "Presentation Materials" }
                    a {
                        class: "btn btn-outline",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Download Presentation"
                    }
                }
            }

            if !topic.description.is_empty() {
                p { class: "topic-description", "{topic.description}" }
            }
        }
    }
}

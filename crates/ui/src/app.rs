use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const PLYR_STYLESHEET: &str = "https://cdn.plyr.io/3.7.8/plyr.css";
const PLYR_SCRIPT: &str = "https://cdn.plyr.io/3.7.8/plyr.polyfilled.js";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Stylesheet { href: PLYR_STYLESHEET }
        document::Script { src: PLYR_SCRIPT }

        document::Title { "Campus" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

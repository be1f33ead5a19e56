use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::Access;

use crate::context::AppContext;
use crate::routes::Route;

/// Renders `children` only while a session exists.
///
/// The decision is taken from the gate on every render; the watchers only
/// make sure a render happens when the gate changes or a redirect is asked for.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let gate = ctx.gate();
    let navigator = use_navigator();
    let mut generation = use_signal(|| 0_u64);

    use_hook(|| {
        let mut session_changes = gate.subscribe();
        spawn(async move {
            while session_changes.changed().await.is_ok() {
                *generation.write() += 1;
            }
        });
        let mut redirect_requests = ctx.login_redirects().subscribe();
        spawn(async move {
            while redirect_requests.changed().await.is_ok() {
                *generation.write() += 1;
            }
        });
    });

    let redirect_gate = gate.clone();
    use_effect(move || {
        let _ = generation();
        if redirect_gate.check_access() == Access::RedirectToLogin {
            tracing::debug!("no session, redirecting to login");
            let _ = navigator.replace(Route::Login {});
        }
    });

    let _ = generation();
    let access = gate.check_access();

    match access {
        Access::Granted(_) => children,
        Access::RedirectToLogin => rsx! {
            div { class: "page redirecting",
                p { "Redirecting to sign in..." }
            }
        },
    }
}

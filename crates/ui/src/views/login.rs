use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth();
    let gate = ctx.gate();

    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| gate.last_error());
    let mut submitting = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }
        let auth = auth.clone();
        let gate = gate.clone();
        let number = phone();
        submitting.set(true);
        spawn(async move {
            let result = auth.login(&number).await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    let _ = navigator.replace(Route::Courses {});
                }
                Err(_) => error.set(gate.last_error()),
            }
        });
    };

    rsx! {
        div { class: "page login",
            form { class: "login-form", onsubmit: submit,
                h2 { "Sign in" }
                label { r#for: "login-phone", "Phone number" }
                input {
                    id: "login-phone",
                    r#type: "tel",
                    autocomplete: "tel",
                    value: "{phone}",
                    oninput: move |event| phone.set(event.value()),
                }
                if let Some(message) = error() {
                    p { class: "alert alert-error", role: "alert", "{message}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

//! A sign-in form using the password visibility toggle.
//!
//! Submitting is suppressed; the demo only exercises the field controls.

use dioxus::logger::tracing::{debug, info, Level};
use dioxus::prelude::*;
use dioxus_password_field::{FieldVisibility, PasswordField};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(app);
}

fn app() -> Element {
    use_hook(|| info!("authentication form controls loaded"));

    let mut field_state = use_signal(FieldVisibility::default);

    rsx! {
        h1 { "Sign in" }
        form {
            onsubmit: move |evt| evt.prevent_default(),

            label { r#for: "username", "Username" }
            input { id: "username", name: "username", r#type: "text" }

            label { r#for: "password", "Password" }
            PasswordField {
                placeholder: "Password",
                on_toggle: move |state| {
                    debug!(%state, "visibility flipped");
                    field_state.set(state);
                },
            }

            button { r#type: "submit", "Log in" }
        }
        p { class: "field-state", "Password field renders as {field_state}" }
    }
}

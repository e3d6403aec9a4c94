//! Render the field in both states to stdout.
//!
//! The toggle is a live click handler in a real renderer; here the two
//! states are shown by rendering one field per initial value.

use dioxus::prelude::*;
use dioxus_password_field::{FieldVisibility, PasswordField};

fn main() {
    let mut vdom = VirtualDom::new(app);
    vdom.rebuild_in_place();
    println!("{}", dioxus_ssr::render(&vdom));
}

fn app() -> Element {
    rsx! {
        form {
            PasswordField { placeholder: "Password" }
            PasswordField {
                id: "confirm-password",
                icon_id: "confirm-eye-icon",
                initial: FieldVisibility::Revealed,
                placeholder: "Confirm password",
            }
        }
    }
}

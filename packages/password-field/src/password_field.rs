use dioxus::prelude::*;
use tracing::debug;

use crate::{FieldVisibility, VisibilityToggle};

/// Password input with a visibility toggle.
///
/// Uncontrolled by default: the component holds its own
/// [`Signal<FieldVisibility>`] starting at `initial`. Pass `visibility` to
/// drive the state from outside instead; the internal signal is then unused.
///
/// The rendered markup keeps the classic contract (input `#password`,
/// control `a.toggle-password`, icon `i#eye-icon`) so existing feather-icon
/// stylesheets apply unchanged.
#[component]
pub fn PasswordField(
    /// Id of the input element.
    #[props(default = String::from("password"))]
    id: String,
    /// Form field name; falls back to the id.
    name: Option<String>,
    /// Placeholder text for the input.
    placeholder: Option<String>,
    /// Starting state for the uncontrolled case.
    #[props(default)]
    initial: FieldVisibility,
    /// External state; supplying this makes the component controlled.
    visibility: Option<Signal<FieldVisibility>>,
    /// Id of the icon element.
    #[props(default = String::from("eye-icon"))]
    icon_id: String,
    /// Called with the new state after each flip.
    #[props(default)]
    on_toggle: EventHandler<FieldVisibility>,
) -> Element {
    let internal = use_signal(|| initial);
    let state = visibility.unwrap_or(internal);

    use_hook(|| debug!(field = %id, "password field mounted"));
    let unmount_id = id.clone();
    use_drop(move || debug!(field = %unmount_id, "password field unmounted"));

    let vis = state();
    let name = name.unwrap_or_else(|| id.clone());

    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            r#type: vis.input_type(),
            placeholder,
        }
        VisibilityToggle { visibility: state, icon_id, on_toggle }
    }
}

use dioxus::prelude::*;
use tracing::trace;

use crate::FieldVisibility;

/// The clickable eye control on its own.
///
/// The caller owns the [`Signal`] and lays out the input; clicking flips the
/// signal and the icon class follows. [`PasswordField`](crate::PasswordField)
/// composes this for the common case, so the click path is written once.
///
/// The control is an anchor so stylesheets built for the classic markup keep
/// working; the handler suppresses the anchor's default navigation and stops
/// the click from bubbling into the surrounding form.
#[component]
pub fn VisibilityToggle(
    /// Externally owned visibility state.
    mut visibility: Signal<FieldVisibility>,
    /// Id of the icon element.
    #[props(default = String::from("eye-icon"))]
    icon_id: String,
    /// Called with the new state after each flip.
    #[props(default)]
    on_toggle: EventHandler<FieldVisibility>,
) -> Element {
    let toggle = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();

        let next = visibility().toggled();
        visibility.set(next);
        trace!(state = %next, "password visibility toggled");

        on_toggle.call(next);
    };

    let vis = visibility();

    rsx! {
        a { class: "toggle-password", href: "#", onclick: toggle,
            i { id: "{icon_id}", class: vis.icon_class() }
        }
    }
}

//! Icon button component

use dioxus::prelude::*;

/// A minimal button for icon-only row actions.
///
/// Stops event propagation, so a row's own click handling never fires
/// when one of its actions is activated.
#[component]
pub fn IconButton(
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "text-gray-400 hover:text-white hover:bg-gray-700 rounded p-1.5 transition-colors",
            title: title.as_deref(),
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(evt);
            },
            {children}
        }
    }
}

//! Alert dialog view component
//!
//! Pure, props-based dialog for the mock copy-link and download actions.

use dioxus::prelude::*;

/// Alert dialog view - modal message with a single dismiss button
#[component]
pub fn AlertDialogView(
    is_open: bool,
    title: String,
    message: String,
    on_dismiss: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000]",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-xl font-bold text-white mb-4", "{title}" }
                p { class: "text-gray-300 mb-6", "{message}" }

                div { class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

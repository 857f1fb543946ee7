//! Drop zone view component

use crate::components::icons::UploadIcon;
use dioxus::prelude::*;

/// Drop zone view - droppable region and button for sharing files
///
/// Pure view: the launcher decides what drag events and the select
/// button actually do (native picker, dispatching into the store).
#[component]
pub fn DropZoneView(
    /// Whether drag is currently active
    #[props(default = false)]
    is_dragging: bool,
    /// Called when the zone or the select button is clicked
    on_select_click: EventHandler<()>,
    on_drag_enter: EventHandler<DragEvent>,
    on_drag_over: EventHandler<DragEvent>,
    on_drag_leave: EventHandler<DragEvent>,
    on_drop: EventHandler<DragEvent>,
) -> Element {
    let drag_classes = if is_dragging {
        "border-blue-500 bg-blue-900/20 border-solid"
    } else {
        "border-gray-600 border-dashed"
    };

    rsx! {
        div {
            class: "border-2 rounded-lg p-12 transition-all duration-200 cursor-pointer {drag_classes}",
            onclick: move |_| on_select_click.call(()),
            ondragenter: move |evt| on_drag_enter.call(evt),
            ondragover: move |evt| on_drag_over.call(evt),
            ondragleave: move |evt| on_drag_leave.call(evt),
            ondrop: move |evt| on_drop.call(evt),
            div { class: "flex flex-col items-center justify-center space-y-6",
                div { class: "w-16 h-16 text-gray-400",
                    UploadIcon { class: "w-full h-full" }
                }
                div { class: "text-center space-y-2",
                    h3 { class: "text-lg font-semibold text-gray-200", "Drag & drop files to share" }
                    p { class: "text-sm text-gray-400",
                        "or click anywhere in this area to pick files from disk"
                    }
                }
                button {
                    class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                    onclick: move |evt| {
                        // The zone itself opens the picker too
                        evt.stop_propagation();
                        on_select_click.call(());
                    },
                    "Select Files"
                }
            }
        }
    }
}

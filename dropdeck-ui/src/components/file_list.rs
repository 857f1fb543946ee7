//! File list view component

use crate::components::icon_button::IconButton;
use crate::components::icons::{CategoryIcon, DownloadIcon, LinkIcon, ShareIcon};
use dioxus::prelude::*;
use dropdeck_common::{format_file_size, SharedFile};

/// Displays the shared-file list with a count label and per-row actions.
///
/// Shows the "no files yet" placeholder while the list is empty; the
/// placeholder is derived from emptiness, never tracked separately.
#[component]
pub fn FileListView(
    files: Vec<SharedFile>,
    count_label: String,
    /// Called with the file name when the copy-link action is activated
    on_copy_link: EventHandler<String>,
    /// Called with the file name when the download action is activated
    on_download: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex flex-col min-h-0",
            div { class: "flex items-center justify-between mb-3",
                h2 { class: "text-lg font-semibold text-gray-200", "Shared files" }
                span { class: "text-sm text-gray-400", "{count_label}" }
            }
            if files.is_empty() {
                EmptyPlaceholder {}
            } else {
                div { class: "space-y-2 overflow-y-auto",
                    for file in files.iter() {
                        FileRow {
                            file: file.clone(),
                            on_copy_link,
                            on_download,
                        }
                    }
                }
            }
        }
    }
}

/// The "no files yet" filler shown only while the list is empty
#[component]
fn EmptyPlaceholder() -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-10 space-y-3 text-gray-500",
            ShareIcon { class: "w-10 h-10" }
            p { class: "text-sm", "No shared files yet — upload something!" }
        }
    }
}

#[component]
fn FileRow(
    file: SharedFile,
    on_copy_link: EventHandler<String>,
    on_download: EventHandler<String>,
) -> Element {
    let meta = format!("{} • {}", format_file_size(file.size), file.date);
    let copy_name = file.name.clone();
    let download_name = file.name.clone();

    rsx! {
        div {
            class: "flex items-center gap-3 py-2 px-3 bg-gray-800 rounded hover:bg-gray-700 transition-colors border border-gray-700",
            CategoryIcon { category: file.category() }
            div { class: "flex-1 min-w-0",
                div { class: "text-white text-sm font-medium truncate", {file.name.clone()} }
                div { class: "text-gray-400 text-xs mt-1", "{meta}" }
            }
            div { class: "flex items-center gap-1",
                IconButton {
                    title: Some("Copy mock link".to_string()),
                    onclick: move |_| on_copy_link.call(copy_name.clone()),
                    LinkIcon {}
                }
                IconButton {
                    title: Some("Download (mock)".to_string()),
                    onclick: move |_| on_download.call(download_name.clone()),
                    DownloadIcon {}
                }
            }
        }
    }
}

//! Desktop app shell - window config, store ownership, event wiring
//!
//! Owns the Store<ShareState> and translates platform events (native
//! file picker, webview drag-and-drop) into store dispatches. All
//! rendering is delegated to the pure views in dropdeck-ui.

use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use dropdeck_common::SharedFile;
use dropdeck_ui::stores::{ShareEvent, ShareState};
use dropdeck_ui::{AlertDialogView, DropZoneView, FileListView};
use tracing::{error, warn};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("dropdeck")
        .with_inner_size(LogicalSize::new(760, 860))
        .with_decorations(true)
        .with_background_color((0x11, 0x18, 0x27, 0xff))
}

fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x11, 0x18, 0x27, 0xff))
        // HTML drag events must reach the webview for the drop zone
        .with_disable_drag_drop_handler(false)
}

pub fn launch_app() {
    LaunchBuilder::desktop().with_cfg(make_config()).launch(App);
}

/// Open the native picker and turn the selection into share records.
///
/// Files whose metadata cannot be read are skipped with a warning;
/// everything else enters the list with a "just now" date.
async fn pick_files_from_dialog() -> Vec<SharedFile> {
    let Some(handles) = rfd::AsyncFileDialog::new()
        .set_title("Share files")
        .pick_files()
        .await
    else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for handle in handles {
        match tokio::fs::metadata(handle.path()).await {
            Ok(meta) => files.push(SharedFile::just_now(handle.file_name(), meta.len())),
            Err(e) => warn!("Skipping {}: {}", handle.file_name(), e),
        }
    }
    files
}

#[component]
fn App() -> Element {
    let state = use_hook(|| Store::new(ShareState::default()));

    // Seed once at startup; a restart begins empty and seeds again
    use_effect(move || match dropdeck_mocks::load_seed_files() {
        Ok(seed) => state.write().dispatch(ShareEvent::SeedLoaded(seed)),
        Err(e) => error!("Failed to load seed fixture: {}", e),
    });

    let on_select_click = move |_| {
        spawn(async move {
            let files = pick_files_from_dialog().await;
            state.write().dispatch(ShareEvent::FilesAdded(files));
        });
    };

    let on_drag_enter = move |evt: DragEvent| {
        evt.prevent_default();
        state.write().dispatch(ShareEvent::DragStateChanged(true));
    };
    let on_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        state.write().dispatch(ShareEvent::DragStateChanged(true));
    };
    let on_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        state.write().dispatch(ShareEvent::DragStateChanged(false));
    };
    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let files: Vec<SharedFile> = evt
            .files()
            .iter()
            .map(|f| SharedFile::just_now(f.name(), f.size()))
            .collect();
        let mut share = state.write();
        share.dispatch(ShareEvent::DragStateChanged(false));
        share.dispatch(ShareEvent::FilesAdded(files));
    };

    let share = state.read().clone();
    let files: Vec<SharedFile> = share.list.rows().cloned().collect();
    let count_label = share.list.count_label();
    let alert = share.active_alert;

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900 text-white px-6 py-8",
            div { class: "max-w-2xl mx-auto space-y-8",
                header {
                    h1 { class: "text-2xl font-bold", "dropdeck" }
                    p { class: "text-sm text-gray-400 mt-1",
                        "Demo drop zone: nothing leaves your machine"
                    }
                }
                DropZoneView {
                    is_dragging: share.is_dragging,
                    on_select_click,
                    on_drag_enter,
                    on_drag_over,
                    on_drag_leave,
                    on_drop,
                }
                FileListView {
                    files,
                    count_label,
                    on_copy_link: move |file_name| {
                        state.write().dispatch(ShareEvent::CopyLinkRequested { file_name })
                    },
                    on_download: move |file_name| {
                        state.write().dispatch(ShareEvent::DownloadRequested { file_name })
                    },
                }
            }
        }
        AlertDialogView {
            is_open: alert.is_some(),
            title: alert.as_ref().map(|a| a.title.clone()).unwrap_or_default(),
            message: alert.as_ref().map(|a| a.message.clone()).unwrap_or_default(),
            on_dismiss: move |_| state.write().dispatch(ShareEvent::AlertDismissed),
        }
    }
}

//! Share list state store
//!
//! Single event/reducer state machine for the drop zone, the file list
//! and the mock action dialogs. The launcher dispatches events; views
//! are pure functions of this state.

use dioxus::prelude::*;
use dropdeck_common::{ShareList, SharedFile};
use tracing::debug;

/// An open alert dialog for one of the mock actions.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareAlert {
    pub title: String,
    pub message: String,
}

impl ShareAlert {
    /// Alert for the mock copy-link action.
    pub fn copy_link(file_name: &str) -> Self {
        Self {
            title: "Copy link".to_string(),
            message: format!("🔗 Mock: link for \"{}\" copied (demo)", file_name),
        }
    }

    /// Alert for the mock download action.
    pub fn download(file_name: &str) -> Self {
        Self {
            title: "Download".to_string(),
            message: format!("⬇️ Mock download: \"{}\" (no actual file)", file_name),
        }
    }
}

/// Events the reducer understands.
#[derive(Clone, Debug, PartialEq)]
pub enum ShareEvent {
    /// User dropped or picked files; newest ends up at the top.
    FilesAdded(Vec<SharedFile>),
    /// Seed records loaded once at startup, only into an empty list.
    SeedLoaded(Vec<SharedFile>),
    /// Drag entered or left the drop zone (cosmetic only).
    DragStateChanged(bool),
    /// Mock copy-link action on a row.
    CopyLinkRequested { file_name: String },
    /// Mock download action on a row.
    DownloadRequested { file_name: String },
    /// The open alert was dismissed.
    AlertDismissed,
}

/// Top-level state for the drop-zone demo.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ShareState {
    /// The shared-file list (rows, count, placeholder derivation)
    pub list: ShareList,
    /// Whether a drag is currently hovering the drop zone
    pub is_dragging: bool,
    /// Currently open mock-action alert, if any
    pub active_alert: Option<ShareAlert>,
}

impl ShareState {
    pub fn dispatch(&mut self, event: ShareEvent) {
        match event {
            ShareEvent::FilesAdded(files) => {
                if files.is_empty() {
                    return;
                }
                debug!("adding {} file(s) to the share list", files.len());
                self.list.add_files(files);
            }
            ShareEvent::SeedLoaded(seed) => {
                debug!("loading {} seed record(s)", seed.len());
                self.list.load_seed(seed);
            }
            ShareEvent::DragStateChanged(is_dragging) => {
                self.is_dragging = is_dragging;
            }
            ShareEvent::CopyLinkRequested { file_name } => {
                self.active_alert = Some(ShareAlert::copy_link(&file_name));
            }
            ShareEvent::DownloadRequested { file_name } => {
                self.active_alert = Some(ShareAlert::download(&file_name));
            }
            ShareEvent::AlertDismissed => {
                self.active_alert = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SharedFile {
        SharedFile::just_now(name, 2048)
    }

    fn names(state: &ShareState) -> Vec<&str> {
        state.list.rows().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_files_added_prepends() {
        let mut state = ShareState::default();
        state.dispatch(ShareEvent::FilesAdded(vec![file("a"), file("b")]));
        assert_eq!(names(&state), vec!["b", "a"]);
        assert_eq!(state.list.count_label(), "2 items");
    }

    #[test]
    fn test_empty_add_is_noop() {
        let mut state = ShareState::default();
        state.dispatch(ShareEvent::FilesAdded(Vec::new()));
        assert!(state.list.show_placeholder());
    }

    #[test]
    fn test_seed_skipped_when_rows_exist() {
        let mut state = ShareState::default();
        state.dispatch(ShareEvent::FilesAdded(vec![file("real")]));
        state.dispatch(ShareEvent::SeedLoaded(vec![file("mock")]));
        assert_eq!(names(&state), vec!["real"]);
    }

    #[test]
    fn test_actions_only_open_alerts() {
        let mut state = ShareState::default();
        state.dispatch(ShareEvent::SeedLoaded(vec![file("notes.txt")]));
        let before = state.list.clone();

        state.dispatch(ShareEvent::CopyLinkRequested {
            file_name: "notes.txt".to_string(),
        });
        assert_eq!(state.list, before);
        let alert = state.active_alert.as_ref().unwrap();
        assert_eq!(alert.message, "🔗 Mock: link for \"notes.txt\" copied (demo)");

        state.dispatch(ShareEvent::DownloadRequested {
            file_name: "notes.txt".to_string(),
        });
        assert_eq!(state.list, before);
        let alert = state.active_alert.as_ref().unwrap();
        assert_eq!(alert.message, "⬇️ Mock download: \"notes.txt\" (no actual file)");

        state.dispatch(ShareEvent::AlertDismissed);
        assert!(state.active_alert.is_none());
        assert_eq!(state.list, before);
    }

    #[test]
    fn test_drag_state_toggles() {
        let mut state = ShareState::default();
        state.dispatch(ShareEvent::DragStateChanged(true));
        assert!(state.is_dragging);
        state.dispatch(ShareEvent::DragStateChanged(false));
        assert!(!state.is_dragging);
    }
}

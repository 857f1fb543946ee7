//! Shared UI components

pub mod dialog;
pub mod drop_zone;
pub mod file_list;
pub mod icon_button;
pub mod icons;

pub use dialog::AlertDialogView;
pub use drop_zone::DropZoneView;
pub use file_list::FileListView;
pub use icon_button::IconButton;
pub use icons::{
    CategoryIcon, DownloadIcon, FileArchiveIcon, FileChartIcon, FileCodeIcon, FileIcon,
    FileImageIcon, FileMusicIcon, FileSpreadsheetIcon, FileTextIcon, FileVideoIcon, LinkIcon,
    ShareIcon, UploadIcon,
};

//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;
use dropdeck_common::FileCategory;

/// Upload icon (arrow out of a tray)
#[component]
pub fn UploadIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 3v12" }
            path { d: "m17 8-5-5-5 5" }
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
        }
    }
}

/// Share icon (arrow out of a box), used for the empty placeholder
#[component]
pub fn ShareIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 2v13" }
            path { d: "m16 6-4-4-4 4" }
            path { d: "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" }
        }
    }
}

/// Link icon (two chain segments)
#[component]
pub fn LinkIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
            path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
        }
    }
}

/// Download icon (arrow into a tray)
#[component]
pub fn DownloadIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 15V3" }
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "m7 10 5 5 5-5" }
        }
    }
}

/// Generic file icon
#[component]
pub fn FileIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
        }
    }
}

/// Image file icon
#[component]
pub fn FileImageIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            circle { cx: "10", cy: "12", r: "2" }
            path { d: "m20 17-1.296-1.296a2.41 2.41 0 0 0-3.408 0L9 22" }
        }
    }
}

/// Text document icon (also used for PDFs, tinted differently)
#[component]
pub fn FileTextIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M10 9H8" }
            path { d: "M16 13H8" }
            path { d: "M16 17H8" }
        }
    }
}

/// Spreadsheet file icon
#[component]
pub fn FileSpreadsheetIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M8 13h2" }
            path { d: "M14 13h2" }
            path { d: "M8 17h2" }
            path { d: "M14 17h2" }
        }
    }
}

/// Column chart file icon, used for presentations
#[component]
pub fn FileChartIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M8 18v-2" }
            path { d: "M12 18v-4" }
            path { d: "M16 18v-6" }
        }
    }
}

/// Archive file icon
#[component]
pub fn FileArchiveIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M10 7V6" }
            path { d: "M10 12v-1" }
            circle { cx: "10", cy: "17", r: "2" }
        }
    }
}

/// Audio file icon
#[component]
pub fn FileMusicIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            circle { cx: "10", cy: "16", r: "2" }
            path { d: "M12 16v-5l3 1" }
        }
    }
}

/// Video file icon
#[component]
pub fn FileVideoIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "m10 11 5 3-5 3v-6z" }
        }
    }
}

/// Code file icon
#[component]
pub fn FileCodeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "m9 13-2 2 2 2" }
            path { d: "m15 13 2 2-2 2" }
        }
    }
}

/// Row icon for a file category, tinted per type.
#[component]
pub fn CategoryIcon(
    category: FileCategory,
    #[props(default = "w-5 h-5")] class: &'static str,
) -> Element {
    let tint = match category {
        FileCategory::Image => "text-purple-400",
        FileCategory::Pdf => "text-red-400",
        FileCategory::Document => "text-blue-400",
        FileCategory::Spreadsheet => "text-green-400",
        FileCategory::Presentation => "text-orange-400",
        FileCategory::Archive => "text-yellow-400",
        FileCategory::Audio => "text-pink-400",
        FileCategory::Video => "text-indigo-400",
        FileCategory::Code => "text-teal-400",
        FileCategory::Other => "text-gray-400",
    };

    rsx! {
        span { class: "{tint}",
            match category {
                FileCategory::Image => rsx! { FileImageIcon { class } },
                FileCategory::Pdf | FileCategory::Document => rsx! { FileTextIcon { class } },
                FileCategory::Spreadsheet => rsx! { FileSpreadsheetIcon { class } },
                FileCategory::Presentation => rsx! { FileChartIcon { class } },
                FileCategory::Archive => rsx! { FileArchiveIcon { class } },
                FileCategory::Audio => rsx! { FileMusicIcon { class } },
                FileCategory::Video => rsx! { FileVideoIcon { class } },
                FileCategory::Code => rsx! { FileCodeIcon { class } },
                FileCategory::Other => rsx! { FileIcon { class } },
            }
        }
    }
}

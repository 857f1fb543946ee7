//! Shared file records and extension-based categorization

/// A single shared file as shown in the list.
///
/// Purely display data: `date` is a pre-rendered string ("just now",
/// "shared yesterday", ...), never a timestamp. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedFile {
    pub name: String,
    pub size: u64,
    pub date: String,
}

impl SharedFile {
    pub fn new(name: impl Into<String>, size: u64, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            date: date.into(),
        }
    }

    /// Record for a file the user just dropped or picked.
    pub fn just_now(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, size, "just now")
    }

    /// Category derived from the file name, used to pick the row icon.
    pub fn category(&self) -> FileCategory {
        FileCategory::from_file_name(&self.name)
    }
}

/// File type buckets for the row icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Archive,
    Audio,
    Video,
    Code,
    /// Unrecognized or missing extension
    Other,
}

impl FileCategory {
    /// Categorize by the substring after the last `.`, case-insensitive.
    ///
    /// A name without a dot is treated as one big "extension" that
    /// matches nothing, so extensionless files land in `Other`.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" => Self::Image,
            "pdf" => Self::Pdf,
            "doc" | "docx" | "txt" | "rtf" | "odt" => Self::Document,
            "xls" | "xlsx" | "csv" => Self::Spreadsheet,
            "ppt" | "pptx" => Self::Presentation,
            "zip" | "rar" | "7z" | "tar" | "gz" => Self::Archive,
            "mp3" | "wav" | "ogg" | "flac" => Self::Audio,
            "mp4" | "avi" | "mov" | "mkv" => Self::Video,
            "js" | "html" | "css" | "py" | "java" | "cpp" | "json" => Self::Code,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(
            FileCategory::from_file_name("photo.JPG"),
            FileCategory::from_file_name("photo.jpg")
        );
        assert_eq!(FileCategory::from_file_name("photo.JPG"), FileCategory::Image);
    }

    #[test]
    fn test_no_extension_is_other() {
        assert_eq!(FileCategory::from_file_name("README"), FileCategory::Other);
    }

    #[test]
    fn test_unknown_extension_is_other() {
        assert_eq!(FileCategory::from_file_name("data.xyz"), FileCategory::Other);
    }

    #[test]
    fn test_last_extension_wins() {
        assert_eq!(
            FileCategory::from_file_name("backup.tar.gz"),
            FileCategory::Archive
        );
    }

    #[test]
    fn test_one_of_each_category() {
        let cases = [
            ("cover.png", FileCategory::Image),
            ("invoice.pdf", FileCategory::Pdf),
            ("notes.txt", FileCategory::Document),
            ("budget.xlsx", FileCategory::Spreadsheet),
            ("deck.pptx", FileCategory::Presentation),
            ("dump.zip", FileCategory::Archive),
            ("song.flac", FileCategory::Audio),
            ("clip.mkv", FileCategory::Video),
            ("script.py", FileCategory::Code),
        ];
        for (name, expected) in cases {
            assert_eq!(FileCategory::from_file_name(name), expected, "{name}");
        }
    }

    #[test]
    fn test_just_now_record() {
        let file = SharedFile::just_now("photo.png", 42);
        assert_eq!(file.date, "just now");
        assert_eq!(file.category(), FileCategory::Image);
    }
}

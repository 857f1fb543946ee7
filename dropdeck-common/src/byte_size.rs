//! Human-readable byte size formatting

/// Format a byte count in the largest fitting unit, one decimal place.
///
/// Values below 1 KB are shown as whole bytes. Anything at or above
/// 1 GB stays in GB, so absurd inputs never run out of units.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_whole_bytes_below_one_kb() {
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(131_072), "128.0 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_file_size(1_048_576), "1.0 MB");
        assert_eq!(format_file_size(2_516_582), "2.4 MB");
    }

    #[test]
    fn test_gigabytes() {
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_clamps_to_gb_above_the_table() {
        // 2 TB stays in GB rather than indexing past the unit list
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048.0 GB");
    }
}

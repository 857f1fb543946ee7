//! Seed data for first load
//!
//! Static fixture records compiled into the binary and parsed once.

use dropdeck_common::SharedFile;
use serde::Deserialize;
use thiserror::Error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FixtureData {
    files: Vec<FixtureFile>,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    name: String,
    size: u64,
    date: String,
}

/// Parse the embedded fixture into seed records, in fixture order.
pub fn load_seed_files() -> Result<Vec<SharedFile>, SeedError> {
    let fixture: FixtureData = serde_json::from_str(FIXTURE_JSON)?;
    Ok(fixture
        .files
        .into_iter()
        .map(|f| SharedFile::new(f.name, f.size, f.date))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropdeck_common::format_file_size;

    #[test]
    fn test_fixture_parses_in_order() {
        let seed = load_seed_files().unwrap();
        let names: Vec<&str> = seed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "vacation_planning.pdf",
                "team_photo_2025.jpg",
                "presentation_deck.pptx",
                "notes_onboarding.txt",
            ]
        );
        assert_eq!(seed[0].date, "shared 2 hours ago");
        assert_eq!(seed[3].size, 131_072);
    }

    #[test]
    fn test_fixture_sizes_format_as_original_display_values() {
        let seed = load_seed_files().unwrap();
        assert_eq!(format_file_size(seed[0].size), "2.4 MB");
        assert_eq!(format_file_size(seed[1].size), "5.1 MB");
        assert_eq!(format_file_size(seed[2].size), "3.8 MB");
    }
}

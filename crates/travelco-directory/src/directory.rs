//! The immutable directory of country records.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::record::{CountryRecord, Region};

/// Errors raised while constructing or loading a directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory must contain at least one country record")]
    Empty,

    #[error("duplicate slug in directory: {0}")]
    DuplicateSlug(String),

    #[error("failed to read directory file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse directory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A read-only list of country records, populated once and never mutated.
///
/// Constructed explicitly and passed into the view layer so tests can
/// substitute fixture data. Construction enforces the two invariants the
/// rest of the system relies on: the list is non-empty (so the legacy
/// fallback record always exists) and slugs are unique (so slug lookup is
/// unambiguous).
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    records: Vec<CountryRecord>,
}

impl Directory {
    /// Creates a directory from a record list, validating its invariants.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, DirectoryError> {
        if records.is_empty() {
            return Err(DirectoryError::Empty);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(DirectoryError::DuplicateSlug(record.slug.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Loads a directory from a JSON array of country records.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, DirectoryError> {
        let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    /// Loads a directory from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Returns the full record list, in directory order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record with the given slug.
    ///
    /// Linear scan; returns `None` when the slug is unknown so callers can
    /// decide how to handle a miss.
    pub fn find_by_slug(&self, slug: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|record| record.slug == slug)
    }

    /// Resolves a slug, falling back to the first record on a miss.
    ///
    /// This preserves the original site's navigation behavior: an
    /// unrecognized detail-path segment renders the first country rather
    /// than an error page. Callers that want an explicit not-found result
    /// should use [`Directory::find_by_slug`] instead.
    pub fn resolve_or_first(&self, slug: &str) -> &CountryRecord {
        self.find_by_slug(slug).unwrap_or(&self.records[0])
    }

    /// The built-in directory of the thirteen countries the site ships with.
    pub fn builtin() -> Self {
        let records = vec![
            CountryRecord {
                description: Some(
                    "Experience the blend of tradition and modernity in Qatar.".to_string(),
                ),
                requirements: Some(vec![
                    "Passport (6 months validity)".to_string(),
                    "Photo".to_string(),
                    "Hotel Booking".to_string(),
                ]),
                processing_time: Some("2-3 Days".to_string()),
                price: Some("QAR 100".to_string()),
                image: Some(unsplash("photo-1575881875475-31023242e3f9")),
                ..CountryRecord::new("Qatar", "QA", "qatar", Region::MiddleEast, "🇶🇦")
            },
            CountryRecord {
                description: Some("Visit Dubai, Abu Dhabi and more with ease.".to_string()),
                requirements: Some(vec![
                    "Passport scan".to_string(),
                    "Photo".to_string(),
                    "Flight booking".to_string(),
                ]),
                processing_time: Some("1-2 Days".to_string()),
                price: Some("QAR 300".to_string()),
                image: Some(unsplash("photo-1512453979798-5ea904ac6666")),
                ..CountryRecord::new(
                    "United Arab Emirates",
                    "AE",
                    "united-arab-emirates",
                    Region::MiddleEast,
                    "🇦🇪",
                )
            },
            CountryRecord {
                image: Some(unsplash("photo-1586724237569-f3d0c1dee8c6")),
                ..CountryRecord::new("Saudi Arabia", "SA", "saudi-arabia", Region::MiddleEast, "🇸🇦")
            },
            CountryRecord {
                image: Some(unsplash("photo-1524231757912-21f4fe3a7200")),
                ..CountryRecord::new("Turkey", "TR", "turkey", Region::Europe, "🇹🇷")
            },
            CountryRecord {
                image: Some(unsplash("photo-1565008576549-57569a49371d")),
                ..CountryRecord::new("Georgia", "GE", "georgia", Region::Europe, "🇬🇪")
            },
            CountryRecord {
                image: Some(unsplash("photo-1513635269975-59663e0ac1ad")),
                ..CountryRecord::new("United Kingdom", "GB", "united-kingdom", Region::Europe, "🇬🇧")
            },
            CountryRecord {
                image: Some(unsplash("photo-1524492412937-b28074a5d7da")),
                ..CountryRecord::new("India", "IN", "india", Region::Asia, "🇮🇳")
            },
            CountryRecord {
                image: Some(unsplash("photo-1552465011-b4e21bf6e79a")),
                ..CountryRecord::new("Thailand", "TH", "thailand", Region::Asia, "🇹🇭")
            },
            CountryRecord {
                image: Some(unsplash("photo-1528164344705-4754268798be")),
                ..CountryRecord::new("Japan", "JP", "japan", Region::Asia, "🇯🇵")
            },
            CountryRecord {
                image: Some(unsplash("photo-1501594907352-04cda38ebc29")),
                ..CountryRecord::new("United States", "US", "united-states", Region::Americas, "🇺🇸")
            },
            CountryRecord {
                image: Some(unsplash("photo-1503614472-8c93d56e92ce")),
                ..CountryRecord::new("Canada", "CA", "canada", Region::Americas, "🇨🇦")
            },
            CountryRecord {
                image: Some(unsplash("photo-1523482580672-01e6f2eb60b3")),
                ..CountryRecord::new("Australia", "AU", "australia", Region::Oceania, "🇦🇺")
            },
            CountryRecord {
                image: Some(unsplash("photo-1547471080-7cc2caa01a7e")),
                ..CountryRecord::new("Kenya", "KE", "kenya", Region::Africa, "🇰🇪")
            },
        ];

        // Invariants hold by construction for the built-in list.
        Self { records }
    }
}

/// Builds a full-size Unsplash image URL from a photo id.
fn unsplash(photo_id: &str) -> String {
    format!("https://images.unsplash.com/{photo_id}?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directory_is_valid() {
        let directory = Directory::builtin();
        assert_eq!(directory.len(), 13);

        // Re-validating through the public constructor must succeed.
        Directory::new(directory.records().to_vec()).unwrap();
    }

    #[test]
    fn empty_directory_is_rejected() {
        assert!(matches!(
            Directory::new(Vec::new()),
            Err(DirectoryError::Empty)
        ));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let records = vec![
            CountryRecord::new("Qatar", "QA", "qatar", Region::MiddleEast, "🇶🇦"),
            CountryRecord::new("Qatar Copy", "QA", "qatar", Region::MiddleEast, "🇶🇦"),
        ];

        match Directory::new(records) {
            Err(DirectoryError::DuplicateSlug(slug)) => assert_eq!(slug, "qatar"),
            other => panic!("expected duplicate slug error, got {other:?}"),
        }
    }

    #[test]
    fn find_by_slug_hit_and_miss() {
        let directory = Directory::builtin();

        let turkey = directory.find_by_slug("turkey").unwrap();
        assert_eq!(turkey.name, "Turkey");
        assert_eq!(turkey.slug, "turkey");

        assert!(directory.find_by_slug("nope").is_none());
    }

    #[test]
    fn resolve_or_first_falls_back_to_first_record() {
        let directory = Directory::builtin();

        assert_eq!(directory.resolve_or_first("turkey").slug, "turkey");
        assert_eq!(directory.resolve_or_first("nope").name, "Qatar");
        assert_eq!(directory.resolve_or_first("").name, "Qatar");
    }

    #[test]
    fn loads_directory_from_json() {
        let json = r#"[
            {"name": "Qatar", "code": "QA", "slug": "qatar", "region": "Middle East", "flag": "🇶🇦"},
            {"name": "Japan", "code": "JP", "slug": "japan", "region": "Asia", "flag": "🇯🇵"}
        ]"#;

        let directory = Directory::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.records()[1].region, Region::Asia);
    }

    #[test]
    fn json_with_duplicate_slugs_is_rejected() {
        let json = r#"[
            {"name": "Qatar", "code": "QA", "slug": "qatar", "region": "Middle East", "flag": "🇶🇦"},
            {"name": "Qatar", "code": "QA", "slug": "qatar", "region": "Middle East", "flag": "🇶🇦"}
        ]"#;

        assert!(matches!(
            Directory::from_json_reader(json.as_bytes()),
            Err(DirectoryError::DuplicateSlug(_))
        ));
    }
}

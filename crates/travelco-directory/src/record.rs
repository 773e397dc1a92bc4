//! Country record types for the visa directory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic region a country is listed under.
///
/// The set is fixed; region filtering matches on exact variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Middle East")]
    MiddleEast,
    Asia,
    Europe,
    Africa,
    Americas,
    Oceania,
}

impl Region {
    /// Returns the display label for the region.
    pub fn label(&self) -> &'static str {
        match self {
            Region::MiddleEast => "Middle East",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Oceania => "Oceania",
        }
    }

    /// Returns all regions, in the order they appear in the region tabs.
    pub fn all() -> &'static [Region] {
        &[
            Region::MiddleEast,
            Region::Asia,
            Region::Europe,
            Region::Africa,
            Region::Americas,
            Region::Oceania,
        ]
    }

}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the visa directory.
///
/// Records are read-only after the directory is constructed. `slug` is the
/// only identity key; `name` is unique within the built-in list but is used
/// purely for display and search. Optional fields fall back to hard-coded
/// defaults at render time when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Display name, searched by case-insensitive substring containment.
    pub name: String,

    /// Short ISO-like code. Not validated against any standard.
    pub code: String,

    /// URL-safe identifier, unique, the sole lookup key for detail views.
    pub slug: String,

    /// Region used by the directory filter tabs.
    pub region: Region,

    /// Display glyph (flag emoji). Cosmetic only.
    pub flag: String,

    /// Short marketing blurb for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered list of required documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,

    /// Typical processing time, e.g. "2-3 Days".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,

    /// Display price, e.g. "QAR 100".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Absolute URL of the detail-page banner image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CountryRecord {
    /// Creates a record with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        slug: impl Into<String>,
        region: Region,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            slug: slug.into(),
            region,
            flag: flag.into(),
            description: None,
            requirements: None,
            processing_time: None,
            price: None,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_display_matches_label() {
        for region in Region::all() {
            assert_eq!(region.to_string(), region.label());
        }
    }

    #[test]
    fn record_deserializes_original_json_shape() {
        let json = r#"{
            "name": "Qatar",
            "code": "QA",
            "slug": "qatar",
            "region": "Middle East",
            "flag": "🇶🇦",
            "processingTime": "2-3 Days",
            "price": "QAR 100"
        }"#;

        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region, Region::MiddleEast);
        assert_eq!(record.processing_time.as_deref(), Some("2-3 Days"));
        assert!(record.requirements.is_none());
    }
}

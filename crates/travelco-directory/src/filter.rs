//! Search and region filtering over the directory.

use serde::{Deserialize, Serialize};

use crate::record::{CountryRecord, Region};

/// Region selector: either one concrete region or the "All" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// Returns true when the record's region passes this selector.
    pub fn accepts(&self, record: &CountryRecord) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(region) => record.region == *region,
        }
    }

}

/// The two peer inputs of the directory view: free-text query and region.
///
/// Any combination of the two is valid; the filtered view is re-derived
/// from scratch on every change, so there are no transition constraints
/// and no hidden state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub region: RegionFilter,
}

impl FilterState {
    /// Derives the filtered view of `records` for the current inputs.
    pub fn apply<'a>(&self, records: &'a [CountryRecord]) -> Vec<&'a CountryRecord> {
        apply_filter(records, &self.query, self.region)
    }

    /// Clears both inputs back to the unfiltered view.
    pub fn clear(&mut self) {
        self.query.clear();
        self.region = RegionFilter::All;
    }
}

/// Returns the ordered sub-sequence of `records` matching both inputs.
///
/// A record matches when its region passes `region` and its name contains
/// `query` case-insensitively. A query that is empty or whitespace-only
/// matches every name. Pure and deterministic; input order is preserved
/// and an empty result is a valid value.
pub fn apply_filter<'a>(
    records: &'a [CountryRecord],
    query: &str,
    region: RegionFilter,
) -> Vec<&'a CountryRecord> {
    let needle = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| region.accepts(record))
        .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new("Qatar", "QA", "qatar", Region::MiddleEast, "🇶🇦"),
            CountryRecord::new("Turkey", "TR", "turkey", Region::Europe, "🇹🇷"),
        ]
    }

    #[test]
    fn empty_query_and_all_regions_is_identity() {
        let records = fixture();
        let filtered = apply_filter(&records, "", RegionFilter::All);

        assert_eq!(filtered.len(), records.len());
        for (got, want) in filtered.iter().zip(records.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn non_matching_query_yields_empty_result() {
        let records = fixture();
        assert!(apply_filter(&records, "z", RegionFilter::All).is_empty());
    }

    #[test]
    fn query_matches_substring_case_insensitively() {
        let records = fixture();

        let filtered = apply_filter(&records, "tur", RegionFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Turkey");

        let filtered = apply_filter(&records, "URK", RegionFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Turkey");
    }

    #[test]
    fn whitespace_only_query_is_treated_as_empty() {
        let records = fixture();
        assert_eq!(apply_filter(&records, "   ", RegionFilter::All).len(), 2);
        assert_eq!(
            apply_filter(&records, "  tur  ", RegionFilter::All)[0].name,
            "Turkey"
        );
    }

    #[test]
    fn region_filter_is_sound_and_complete() {
        let records = fixture();

        let filtered = apply_filter(&records, "", RegionFilter::Only(Region::Europe));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Turkey");
        assert!(filtered.iter().all(|r| r.region == Region::Europe));

        let expected = records
            .iter()
            .filter(|r| r.region == Region::Europe)
            .count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn both_filters_combine_with_and() {
        let records = fixture();

        // Query matches Turkey but the region gate excludes it.
        let filtered = apply_filter(&records, "tur", RegionFilter::Only(Region::MiddleEast));
        assert!(filtered.is_empty());
    }

    #[test]
    fn result_preserves_input_order() {
        let records = vec![
            CountryRecord::new("Canada", "CA", "canada", Region::Americas, "🇨🇦"),
            CountryRecord::new("Cameroon", "CM", "cameroon", Region::Africa, "🇨🇲"),
            CountryRecord::new("Chile", "CL", "chile", Region::Americas, "🇨🇱"),
        ];

        let filtered = apply_filter(&records, "c", RegionFilter::All);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Canada", "Cameroon", "Chile"]);
    }

    #[test]
    fn filter_state_apply_matches_free_function() {
        let records = fixture();
        let state = FilterState {
            query: "tur".to_string(),
            region: RegionFilter::All,
        };

        assert_eq!(
            state.apply(&records),
            apply_filter(&records, "tur", RegionFilter::All)
        );
    }

    #[test]
    fn clear_resets_both_inputs() {
        let mut state = FilterState {
            query: "japan".to_string(),
            region: RegionFilter::Only(Region::Asia),
        };

        state.clear();
        assert_eq!(state, FilterState::default());
    }
}

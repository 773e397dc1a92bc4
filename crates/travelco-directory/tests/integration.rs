use travelco_directory::*;

fn two_country_fixture() -> Directory {
    Directory::new(vec![
        CountryRecord::new("Qatar", "QA", "qatar", Region::MiddleEast, "🇶🇦"),
        CountryRecord::new("Turkey", "TR", "turkey", Region::Europe, "🇹🇷"),
    ])
    .unwrap()
}

// ----------------------------------------------------------------------------
// Built-in dataset invariants
// ----------------------------------------------------------------------------

#[test]
fn test_builtin_has_thirteen_countries() {
    assert_eq!(Directory::builtin().len(), 13);
}

#[test]
fn test_builtin_slugs_are_unique() {
    let directory = Directory::builtin();
    let mut slugs: Vec<&str> = directory.records().iter().map(|r| r.slug.as_str()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), directory.len());
}

#[test]
fn test_builtin_region_counts() {
    let directory = Directory::builtin();
    let count = |region: Region| {
        apply_filter(directory.records(), "", RegionFilter::Only(region)).len()
    };

    assert_eq!(count(Region::MiddleEast), 3);
    assert_eq!(count(Region::Europe), 3);
    assert_eq!(count(Region::Asia), 3);
    assert_eq!(count(Region::Americas), 2);
    assert_eq!(count(Region::Oceania), 1);
    assert_eq!(count(Region::Africa), 1);
}

#[test]
fn test_builtin_first_record_is_qatar() {
    // The first record doubles as the lookup-miss fallback, so its
    // position is load-bearing.
    assert_eq!(Directory::builtin().records()[0].slug, "qatar");
}

// ----------------------------------------------------------------------------
// Filter + lookup end to end
// ----------------------------------------------------------------------------

#[test]
fn test_filter_and_lookup_scenario() {
    let directory = two_country_fixture();
    let records = directory.records();

    let by_query = apply_filter(records, "tur", RegionFilter::All);
    assert_eq!(by_query.len(), 1);
    assert_eq!(by_query[0].name, "Turkey");

    let by_region = apply_filter(records, "", RegionFilter::Only(Region::Europe));
    assert_eq!(by_region.len(), 1);
    assert_eq!(by_region[0].name, "Turkey");

    assert!(apply_filter(records, "z", RegionFilter::All).is_empty());

    assert_eq!(directory.resolve_or_first("turkey").name, "Turkey");
    assert_eq!(directory.resolve_or_first("nope").name, "Qatar");
}

#[test]
fn test_identity_filter_over_builtin() {
    let directory = Directory::builtin();
    let filtered = apply_filter(directory.records(), "", RegionFilter::All);

    assert_eq!(filtered.len(), directory.len());
    for (got, want) in filtered.iter().zip(directory.records()) {
        assert_eq!(*got, want);
    }
}

#[test]
fn test_united_prefix_matches_three_countries_in_order() {
    let directory = Directory::builtin();
    let filtered = apply_filter(directory.records(), "united", RegionFilter::All);

    let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["United Arab Emirates", "United Kingdom", "United States"]);
}

#[test]
fn test_round_trip_through_json() {
    let directory = Directory::builtin();
    let json = serde_json::to_string(directory.records()).unwrap();

    let reloaded = Directory::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(reloaded, directory);
}

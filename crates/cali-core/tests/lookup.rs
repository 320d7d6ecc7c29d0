//! Lookup and comparison properties over the embedded dataset

use std::sync::Arc;

use cali_core::*;

fn setup() -> (Dataset, NameIndex) {
    let dataset = Dataset::embedded().expect("embedded dataset should load");
    let index = NameIndex::from_dataset(&dataset);
    (dataset, index)
}

fn with_population(population: f64) -> CountryRecord {
    let metric = Metric::new(1.0, "Test");
    CountryRecord {
        name: "Subject".to_string(),
        code: "SU".to_string(),
        population: Metric::new(population, "Test"),
        gdp: metric.clone(),
        gdp_per_capita: metric.clone(),
        area: metric,
    }
}

// ----------------------------------------------------------------------------
// Name index
// ----------------------------------------------------------------------------

#[test]
fn test_every_canonical_name_resolves_lowercased() {
    let (dataset, index) = setup();

    for country in dataset.countries() {
        let hit = index
            .lookup(&country.name.to_lowercase())
            .unwrap_or_else(|| panic!("{} should resolve", country.name));
        assert!(Arc::ptr_eq(hit, country));
    }
}

#[test]
fn test_every_canonical_name_resolves_uppercased_and_padded() {
    let (dataset, index) = setup();

    for country in dataset.countries() {
        let query = format!("  {}  ", country.name.to_uppercase());
        assert!(index.lookup(&query).is_some(), "{query:?} should resolve");
    }
}

#[test]
fn test_resolvable_aliases_share_identity() {
    let (_, index) = setup();

    let mut checked = 0;
    for (alias, canonical) in ALIASES {
        if let Some(target) = index.lookup(canonical) {
            let hit = index.lookup(alias).expect("alias with present target should resolve");
            if hit.name.to_lowercase() == *canonical {
                assert!(Arc::ptr_eq(hit, target), "{alias} should share {canonical}");
                checked += 1;
            }
        }
    }
    assert!(checked > 0, "embedded dataset should exercise some aliases");
}

#[test]
fn test_dangling_aliases_resolve_to_nothing() {
    let (_, index) = setup();

    for (alias, canonical) in ALIASES {
        if index.lookup(canonical).is_none() {
            assert!(index.lookup(alias).is_none(), "{alias} should not resolve");
        }
    }
    // Myanmar is not in the embedded dataset
    assert!(index.lookup("burma").is_none());
}

#[test]
fn test_common_aliases() {
    let (_, index) = setup();

    assert_eq!(index.lookup("USA").unwrap().name, "United States");
    assert_eq!(index.lookup("south korea").unwrap().name, "Korea, Rep.");
    assert_eq!(index.lookup("DRC").unwrap().name, "Congo, Dem. Rep.");
    assert_eq!(index.lookup("congo").unwrap().name, "Congo, Rep.");
    assert_eq!(index.lookup("Holland").unwrap().name, "Netherlands");
}

#[test]
fn test_no_partial_matches() {
    let (_, index) = setup();

    assert!(index.lookup("United").is_none());
    assert!(index.lookup("States").is_none());
    assert!(index.lookup("").is_none());
    assert!(index.lookup("Atlantis").is_none());
}

#[test]
fn test_reference_region_not_indexed() {
    let (_, index) = setup();
    assert!(index.lookup("california").is_none());
}

// ----------------------------------------------------------------------------
// Comparison
// ----------------------------------------------------------------------------

#[test]
fn test_format_ratio_anchors() {
    assert_eq!(format_ratio(39.0, 39.0), "1.0×");
    assert_eq!(format_ratio(78.0, 39.0), "2.0×");
    assert_eq!(format_ratio(19.5, 39.0), "50%");
}

#[test]
fn test_verdict_boundaries() {
    let reference = with_population(39.0);

    let double = compare_verdict(&with_population(78.0), &reference);
    assert_eq!(double.ratio, 2.0);
    assert_eq!(double.summary, "2.0× the population");
    assert!(double.is_larger);

    let same = compare_verdict(&with_population(39.0), &reference);
    assert_eq!(same.summary, "about the same population");
    assert!(same.is_larger);

    let fewer = compare_verdict(&with_population(29.25), &reference);
    assert_eq!(fewer.ratio, 0.75);
    assert_eq!(fewer.summary, "25% fewer people");
    assert!(!fewer.is_larger);

    let small = compare_verdict(&with_population(10.0), &reference);
    assert_eq!(small.summary, "26% of the population");
    assert!(!small.is_larger);
}

#[test]
fn test_verdict_against_embedded_reference() {
    let (dataset, index) = setup();
    let reference = dataset.reference();

    let japan = index.lookup("japan").unwrap();
    let verdict = compare_verdict(japan, reference);
    assert!(verdict.is_larger);
    assert!(verdict.summary.ends_with("× the population"));

    let netherlands = index.lookup("netherlands").unwrap();
    assert!(!compare_verdict(netherlands, reference).is_larger);
}

#[test]
fn test_display_names_for_embedded_countries() {
    let (_, index) = setup();

    assert_eq!(display_name(&index.lookup("vietnam").unwrap().name), "Vietnam");
    assert_eq!(display_name(&index.lookup("russia").unwrap().name), "Russia");
    assert_eq!(display_name(&index.lookup("japan").unwrap().name), "Japan");
}

//! Integration tests for regions

use mstgraph_foundation::{ErrorCategory, Region};

#[test]
fn default_region_is_jp() {
    assert_eq!(Region::default(), Region::JP);
}

#[test]
fn codes_round_trip_case_insensitively() {
    for region in Region::ALL {
        assert_eq!(region.code().parse::<Region>().unwrap(), region);
        assert_eq!(region.code().to_lowercase().parse::<Region>().unwrap(), region);
    }
}

#[test]
fn unknown_region_is_a_caller_error() {
    let err = "EU".parse::<Region>().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Caller);
    assert!(err.to_string().contains("EU"));
}

#[test]
fn regions_are_ordered() {
    let mut regions = vec![Region::TW, Region::JP, Region::NA];
    regions.sort();
    assert_eq!(regions, vec![Region::JP, Region::NA, Region::TW]);
}

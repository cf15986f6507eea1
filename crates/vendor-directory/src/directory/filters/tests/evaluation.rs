use super::common::*;
use crate::directory::domain::VendorRecord;
use crate::directory::filters::{count_matching, filter_vendors, ActiveFilterSet, FacetSelection};

#[test]
fn empty_selection_returns_input_unchanged() {
    let vendors = marketplace_vendors();
    let filtered = filter_vendors(&vendors, &ActiveFilterSet::new());
    assert_eq!(filtered, vendors);

    let none: Vec<VendorRecord> = Vec::new();
    assert!(filter_vendors(&none, &ActiveFilterSet::new()).is_empty());
}

#[test]
fn empty_vendor_page_stays_empty_under_any_selection() {
    let filters = ActiveFilterSet::new()
        .toggle("cities", "Pune")
        .set_budget(Some(0.0), Some(1.0));
    let none: Vec<VendorRecord> = Vec::new();
    assert!(filter_vendors(&none, &filters).is_empty());
}

#[test]
fn walkthrough_city_and_budget_keeps_only_priced_pune_vendor() {
    let vendors = walkthrough_vendors();
    let filters = ActiveFilterSet::new()
        .toggle("cities", "Pune")
        .set_budget(Some(10000.0), Some(30000.0));

    let filtered = filter_vendors(&vendors, &filters);

    assert_eq!(ids(&filtered), ["pune-priced"]);
    assert_eq!(filters.active_count(), 2);
}

#[test]
fn facets_are_combined_with_and() {
    let vendors = walkthrough_vendors();
    let filters = ActiveFilterSet::new()
        .toggle("cities", "Pune")
        .set_single("rating", FacetSelection::Threshold(4.8));

    assert!(filter_vendors(&vendors, &filters).is_empty());
}

#[test]
fn options_within_a_facet_are_combined_with_or() {
    let vendors = walkthrough_vendors();
    let filters = ActiveFilterSet::new()
        .toggle("cities", "Pune")
        .toggle("cities", "Mumbai");

    assert_eq!(
        ids(&filter_vendors(&vendors, &filters)),
        ["pune-priced", "mumbai-premium", "pune-unpriced"]
    );
}

#[test]
fn survivors_keep_their_received_order() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new().toggle("services", "catering");

    assert_eq!(ids(&filter_vendors(&vendors, &filters)), ["v1", "v3", "v5"]);
}

#[test]
fn every_facet_constrains_together() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new()
        .toggle("services", "decor")
        .toggle("areas", "Baner")
        .set_single("verified", FacetSelection::Flag(true))
        .set_single("experience", FacetSelection::Threshold(5.0))
        .set_single("rating", FacetSelection::Threshold(4.5))
        .set_budget(None, Some(20000.0));

    assert_eq!(ids(&filter_vendors(&vendors, &filters)), ["v1"]);
}

#[test]
fn vendors_missing_location_never_match_a_location_filter() {
    let vendors = marketplace_vendors();
    let by_city = ActiveFilterSet::new()
        .toggle("cities", "Pune")
        .toggle("cities", "Mumbai")
        .toggle("cities", "Nashik");
    let by_area = ActiveFilterSet::new().toggle("areas", "Baner");

    assert!(!ids(&filter_vendors(&vendors, &by_city)).contains(&"v6"));
    assert!(!ids(&filter_vendors(&vendors, &by_area)).contains(&"v5"));
}

#[test]
fn unverified_filter_selects_the_complement() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new().set_single("verified", FacetSelection::Flag(false));

    assert_eq!(ids(&filter_vendors(&vendors, &filters)), ["v2", "v4", "v6"]);
}

#[test]
fn fully_open_budget_is_not_a_constraint() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new().set_budget(None, None);

    assert_eq!(filter_vendors(&vendors, &filters).len(), vendors.len());
}

#[test]
fn zero_to_infinity_budget_still_excludes_unpriced_vendors() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new().set_budget(Some(0.0), Some(f64::INFINITY));

    assert!(!ids(&filter_vendors(&vendors, &filters)).contains(&"v4"));
    assert_eq!(filter_vendors(&vendors, &filters).len(), vendors.len() - 1);
}

#[test]
fn inverted_budget_yields_no_results() {
    let vendors = marketplace_vendors();
    let filters = ActiveFilterSet::new().set_budget(Some(60000.0), Some(10000.0));

    assert!(filter_vendors(&vendors, &filters).is_empty());
}

#[test]
fn borrowed_pages_filter_without_cloning() {
    let vendors = marketplace_vendors();
    let borrowed: Vec<&VendorRecord> = vendors.iter().collect();
    let filters = ActiveFilterSet::new().toggle("cities", "Mumbai");

    let filtered = filter_vendors(&borrowed, &filters);

    assert_eq!(filtered.len(), 2);
    assert!(std::ptr::eq(filtered[0], &vendors[2]));
    assert_eq!(count_matching(&borrowed, &filters), filtered.len());
}

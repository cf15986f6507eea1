use std::collections::BTreeSet;

use super::common::VendorBuilder;
use crate::directory::filters::predicates::{
    located_in, meets_threshold, offers_any_service, verification_matches, within_budget,
};
use crate::directory::filters::BudgetBounds;

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn services_match_on_any_overlap() {
    let vendor = VendorBuilder::new("s")
        .services(&["catering", "decor"])
        .build();

    assert!(offers_any_service(&vendor, &set(&["decor", "music"])));
    assert!(!offers_any_service(&vendor, &set(&["music"])));
    assert!(offers_any_service(&vendor, &set(&[])));
}

#[test]
fn vendors_without_services_only_pass_an_empty_selection() {
    let vendor = VendorBuilder::new("bare").build();
    assert!(offers_any_service(&vendor, &set(&[])));
    assert!(!offers_any_service(&vendor, &set(&["catering"])));
}

#[test]
fn location_requires_an_exact_value() {
    assert!(located_in(Some("Pune"), &set(&["Pune", "Mumbai"])));
    assert!(!located_in(Some("pune"), &set(&["Pune"])));
    assert!(!located_in(None, &set(&["Pune"])));
    assert!(located_in(None, &set(&[])));
}

#[test]
fn budget_bounds_are_inclusive() {
    let bounds = BudgetBounds::new(Some(10000.0), Some(30000.0));
    assert!(within_budget(Some(10000.0), &bounds));
    assert!(within_budget(Some(30000.0), &bounds));
    assert!(!within_budget(Some(30000.5), &bounds));
    assert!(!within_budget(Some(9999.0), &bounds));
}

#[test]
fn missing_bounds_are_open_ended() {
    assert!(within_budget(Some(1.0e9), &BudgetBounds::new(Some(5000.0), None)));
    assert!(within_budget(Some(0.0), &BudgetBounds::new(None, Some(5000.0))));
}

#[test]
fn unknown_price_fails_every_bounded_budget() {
    assert!(!within_budget(None, &BudgetBounds::new(Some(0.0), Some(f64::INFINITY))));
    assert!(!within_budget(None, &BudgetBounds::new(None, Some(50000.0))));
    assert!(!within_budget(Some(f64::NAN), &BudgetBounds::new(Some(0.0), None)));
    assert!(within_budget(None, &BudgetBounds::default()));
}

#[test]
fn inverted_budget_matches_nothing() {
    let inverted = BudgetBounds::new(Some(50000.0), Some(10000.0));
    assert!(!within_budget(Some(20000.0), &inverted));
    assert!(!within_budget(Some(50000.0), &inverted));
}

#[test]
fn thresholds_are_minimums() {
    assert!(meets_threshold(4.5, 4.5));
    assert!(meets_threshold(4.8, 4.5));
    assert!(!meets_threshold(4.4, 4.5));
    assert!(!meets_threshold(f64::NAN, 0.0));
}

#[test]
fn verification_must_equal_the_constraint() {
    let verified = VendorBuilder::new("v").verified().build();
    let unverified = VendorBuilder::new("u").build();

    assert!(verification_matches(&verified, true));
    assert!(!verification_matches(&unverified, true));
    assert!(verification_matches(&unverified, false));
    assert!(!verification_matches(&verified, false));
}

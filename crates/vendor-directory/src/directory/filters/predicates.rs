use std::collections::BTreeSet;

use super::BudgetBounds;
use crate::directory::domain::VendorRecord;

// Every predicate is total: missing or non-numeric vendor data never matches a stated constraint.

pub(crate) fn offers_any_service(vendor: &VendorRecord, selected: &BTreeSet<String>) -> bool {
    selected.is_empty()
        || vendor
            .services
            .iter()
            .any(|service| selected.contains(service))
}

/// Shared by the `cities` and `areas` facets.
pub(crate) fn located_in(value: Option<&str>, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || value.is_some_and(|value| selected.contains(value))
}

/// Unknown prices fail closed against any bounded budget; a fully open budget is no constraint.
pub(crate) fn within_budget(price: Option<f64>, bounds: &BudgetBounds) -> bool {
    if bounds.is_unbounded() {
        return true;
    }
    let Some(price) = price.filter(|price| !price.is_nan()) else {
        return false;
    };
    let min = bounds.min.unwrap_or(f64::NEG_INFINITY);
    let max = bounds.max.unwrap_or(f64::INFINITY);
    price >= min && price <= max
}

pub(crate) fn meets_threshold(value: f64, threshold: f64) -> bool {
    value >= threshold
}

pub(crate) fn verification_matches(vendor: &VendorRecord, expected: bool) -> bool {
    vendor.verified == expected
}

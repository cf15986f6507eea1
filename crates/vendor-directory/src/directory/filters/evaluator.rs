use std::borrow::Borrow;

use tracing::{debug, trace};

use super::predicates::{
    located_in, meets_threshold, offers_any_service, verification_matches, within_budget,
};
use super::ActiveFilterSet;
use crate::directory::domain::VendorRecord;

/// Keeps the vendors that satisfy every active facet, preserving input order.
///
/// Works over owned records or references, so callers can filter a borrowed page without
/// cloning it.
pub fn filter_vendors<V>(vendors: &[V], filters: &ActiveFilterSet) -> Vec<V>
where
    V: Borrow<VendorRecord> + Clone,
{
    if filters.is_empty() {
        return vendors.to_vec();
    }

    let survivors: Vec<V> = vendors
        .iter()
        .filter(|vendor| satisfies(record(*vendor), filters))
        .cloned()
        .collect();

    debug!(
        vendors = vendors.len(),
        survivors = survivors.len(),
        active = filters.active_count(),
        "applied directory filters"
    );
    survivors
}

/// Number of vendors `filter_vendors` would return for the same inputs.
pub fn count_matching<V>(vendors: &[V], filters: &ActiveFilterSet) -> usize
where
    V: Borrow<VendorRecord>,
{
    let count = vendors
        .iter()
        .filter(|vendor| satisfies(record(*vendor), filters))
        .count();
    trace!(vendors = vendors.len(), count, "counted matching vendors");
    count
}

fn record<V: Borrow<VendorRecord>>(vendor: &V) -> &VendorRecord {
    <V as Borrow<VendorRecord>>::borrow(vendor)
}

/// AND across facets, OR within a multi-select facet.
pub(crate) fn satisfies(vendor: &VendorRecord, filters: &ActiveFilterSet) -> bool {
    offers_any_service(vendor, &filters.services)
        && located_in(vendor.city.as_deref(), &filters.cities)
        && located_in(vendor.area.as_deref(), &filters.areas)
        && filters
            .budget
            .map_or(true, |bounds| within_budget(vendor.base_price, &bounds))
        && filters
            .rating
            .map_or(true, |threshold| meets_threshold(vendor.rating, threshold))
        && filters
            .verified
            .map_or(true, |expected| verification_matches(vendor, expected))
        && filters.experience.map_or(true, |threshold| {
            meets_threshold(vendor.experience_years, threshold)
        })
}

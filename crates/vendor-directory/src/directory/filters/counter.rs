use std::borrow::Borrow;

use tracing::debug;

use super::evaluator::count_matching;
use super::{ActiveFilterSet, BudgetBounds, FacetSelection};
use crate::directory::domain::{
    FacetCounts, FacetDescriptor, FacetKey, FacetOptions, VendorRecord,
};

/// Marginal count for every option of every described facet.
///
/// Each option is counted against a copy of `filters` whose own facet is replaced by just that
/// option (never unioned with the current selection), all other facets held fixed. Toggle
/// facets have no options and produce no entries.
pub fn facet_counts<V>(
    vendors: &[V],
    filters: &ActiveFilterSet,
    descriptors: &[FacetDescriptor],
) -> FacetCounts
where
    V: Borrow<VendorRecord>,
{
    let mut counts = FacetCounts::default();

    for descriptor in descriptors {
        let facet = descriptor.key;
        match &descriptor.options {
            FacetOptions::Choices { options } => {
                for option in options {
                    let selection = FacetSelection::option(option.value.clone());
                    if let Some(count) = marginal_count(vendors, filters, facet, selection) {
                        counts.insert(FacetCounts::option_key(facet, &option.value), count);
                    }
                }
            }
            FacetOptions::Ranges { ranges } => {
                for (index, range) in ranges.iter().enumerate() {
                    let selection = FacetSelection::Budget(BudgetBounds::new(range.min, range.max));
                    if let Some(count) = marginal_count(vendors, filters, facet, selection) {
                        counts.insert(FacetCounts::range_key(index), count);
                    }
                }
            }
            FacetOptions::Thresholds { thresholds } => {
                for threshold in thresholds {
                    let selection = FacetSelection::Threshold(threshold.value);
                    if let Some(count) = marginal_count(vendors, filters, facet, selection) {
                        counts.insert(FacetCounts::threshold_key(facet, threshold.value), count);
                    }
                }
            }
            FacetOptions::Toggle => {}
        }
    }

    debug!(
        vendors = vendors.len(),
        descriptors = descriptors.len(),
        entries = counts.len(),
        "computed facet counts"
    );
    counts
}

/// Vendors that would match if `facet` were replaced by `selection`, everything else unchanged.
/// `None` when the selection does not fit the facet.
pub fn marginal_count<V>(
    vendors: &[V],
    filters: &ActiveFilterSet,
    facet: FacetKey,
    selection: FacetSelection,
) -> Option<usize>
where
    V: Borrow<VendorRecord>,
{
    match filters.with_selection(facet, selection) {
        Some(synthetic) => Some(count_matching(vendors, &synthetic)),
        None => {
            debug!(%facet, "descriptor option does not fit facet; skipped");
            None
        }
    }
}

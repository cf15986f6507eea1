use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{FacetCounts, FacetDescriptor, FacetKey, VendorRecord};
use super::filters::{
    facet_counts, filter_vendors, marginal_count, ActiveFilterSet, FacetSelection,
};
use super::sort::{sort_vendors, SortKey};

/// One faceted search over a provider result page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorySearch {
    #[serde(default)]
    pub filters: ActiveFilterSet,
    #[serde(default)]
    pub sort: SortKey,
    /// Provider-supplied descriptors; derived from the vendors when absent.
    #[serde(default)]
    pub descriptors: Option<Vec<FacetDescriptor>>,
}

/// Everything the listing page renders for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub vendors: Vec<VendorRecord>,
    pub total: usize,
    pub sort: SortKey,
    pub sort_label: &'static str,
    pub descriptors: Vec<FacetDescriptor>,
    pub facet_counts: FacetCounts,
    /// Marginal count for switching the verified toggle on.
    pub verified_count: usize,
    pub active_filters: usize,
}

impl DirectorySearch {
    pub fn new(filters: ActiveFilterSet, sort: SortKey) -> Self {
        Self {
            filters,
            sort,
            descriptors: None,
        }
    }

    pub fn with_descriptors(mut self, descriptors: Vec<FacetDescriptor>) -> Self {
        self.descriptors = Some(descriptors);
        self
    }

    pub fn run(&self, vendors: &[VendorRecord]) -> SearchResults {
        let descriptors = self
            .descriptors
            .clone()
            .unwrap_or_else(|| FacetDescriptor::derive_all(vendors));

        let matching = filter_vendors(vendors, &self.filters);
        let ordered = sort_vendors(&matching, self.sort);
        let facet_counts = facet_counts(vendors, &self.filters, &descriptors);
        let verified_count = marginal_count(
            vendors,
            &self.filters,
            FacetKey::Verified,
            FacetSelection::Flag(true),
        )
        .unwrap_or_default();

        debug!(
            vendors = vendors.len(),
            matching = ordered.len(),
            sort = self.sort.as_key(),
            "directory search complete"
        );

        SearchResults {
            total: ordered.len(),
            vendors: ordered,
            sort: self.sort,
            sort_label: self.sort.label(),
            descriptors,
            facet_counts,
            verified_count,
            active_filters: self.filters.active_count(),
        }
    }
}

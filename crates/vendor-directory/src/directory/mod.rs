//! Vendor directory: provider adapter, faceted filtering, counting, and sorting.

pub mod catalog;
mod descriptors;
pub mod domain;
pub mod filters;
pub mod router;
pub mod search;
pub mod sort;

pub use catalog::{CatalogImportError, VendorCatalog};
pub use domain::{
    BudgetRange, FacetCounts, FacetDescriptor, FacetKey, FacetOption, FacetOptions,
    ThresholdOption, VendorId, VendorRecord,
};
pub use filters::{
    count_matching, facet_counts, filter_vendors, marginal_count, ActiveFilterSet, BudgetBounds,
    FacetSelection,
};
pub use router::directory_router;
pub use search::{DirectorySearch, SearchResults};
pub use sort::{sort_vendors, SortKey};

use std::borrow::Borrow;
use std::collections::HashSet;

use super::domain::{
    BudgetRange, FacetDescriptor, FacetKey, FacetOption, FacetOptions, ThresholdOption,
    VendorRecord,
};

const RATING_THRESHOLDS: [f64; 4] = [4.5, 4.0, 3.5, 3.0];
const EXPERIENCE_THRESHOLDS: [f64; 4] = [1.0, 3.0, 5.0, 10.0];

impl FacetDescriptor {
    /// Descriptors for every facet, used when the provider sends none. Enumerable options come
    /// from the distinct values in `vendors` in first-seen order.
    pub fn derive_all<V: Borrow<VendorRecord>>(vendors: &[V]) -> Vec<FacetDescriptor> {
        FacetKey::ordered()
            .into_iter()
            .map(|key| Self::derive(key, vendors))
            .collect()
    }

    pub fn derive<V: Borrow<VendorRecord>>(key: FacetKey, vendors: &[V]) -> FacetDescriptor {
        let records = || {
            vendors
                .iter()
                .map(<V as Borrow<VendorRecord>>::borrow)
        };
        let options = match key {
            FacetKey::Services => choices(records().flat_map(|vendor| vendor.services.iter())),
            FacetKey::Cities => choices(records().filter_map(|vendor| vendor.city.as_ref())),
            FacetKey::Areas => choices(records().filter_map(|vendor| vendor.area.as_ref())),
            FacetKey::Budget => FacetOptions::Ranges {
                ranges: default_budget_ranges(),
            },
            FacetKey::Rating => FacetOptions::Thresholds {
                thresholds: RATING_THRESHOLDS
                    .iter()
                    .map(|value| ThresholdOption {
                        value: *value,
                        label: format!("{value:.1}+ stars"),
                    })
                    .collect(),
            },
            FacetKey::Experience => FacetOptions::Thresholds {
                thresholds: EXPERIENCE_THRESHOLDS
                    .iter()
                    .map(|value| ThresholdOption {
                        value: *value,
                        label: format!("{value}+ years"),
                    })
                    .collect(),
            },
            FacetKey::Verified => FacetOptions::Toggle,
        };

        FacetDescriptor {
            key,
            label: key.label().to_string(),
            options,
        }
    }
}

fn choices<'a>(values: impl Iterator<Item = &'a String>) -> FacetOptions {
    let mut seen = HashSet::new();
    let options = values
        .filter(|value| !value.is_empty() && seen.insert(value.as_str()))
        .map(|value| FacetOption {
            value: value.clone(),
            label: value.clone(),
        })
        .collect();
    FacetOptions::Choices { options }
}

fn default_budget_ranges() -> Vec<BudgetRange> {
    vec![
        BudgetRange {
            min: None,
            max: Some(25_000.0),
            label: "Under 25,000".to_string(),
        },
        BudgetRange {
            min: Some(25_000.0),
            max: Some(50_000.0),
            label: "25,000 - 50,000".to_string(),
        },
        BudgetRange {
            min: Some(50_000.0),
            max: Some(100_000.0),
            label: "50,000 - 1,00,000".to_string(),
        },
        BudgetRange {
            min: Some(100_000.0),
            max: None,
            label: "Above 1,00,000".to_string(),
        },
    ]
}

//! Active filter bookkeeping and the faceted evaluation built on top of it.
//!
//! `ActiveFilterSet` is an immutable value: every store operation returns a new set and the
//! caller threads the current one explicitly. The evaluator and counter only ever read it, and
//! both go through the same per-vendor predicate so counts never drift from results.

mod counter;
mod evaluator;
mod predicates;
mod store;

#[cfg(test)]
mod tests;

pub use counter::{facet_counts, marginal_count};
pub use evaluator::{count_matching, filter_vendors};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::domain::FacetKey;

/// Inclusive price window. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl BudgetBounds {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Replacement value for a single facet, used by `set_single` and by the counter's
/// synthetic one-option filter sets.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetSelection {
    Options(BTreeSet<String>),
    Budget(BudgetBounds),
    Threshold(f64),
    Flag(bool),
    Unset,
}

impl FacetSelection {
    pub fn option(value: impl Into<String>) -> Self {
        Self::Options(BTreeSet::from([value.into()]))
    }
}

/// Current selection across every facet. Absent (`None` or an empty set) means the facet
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilterSet {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    services: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    cities: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    areas: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    budget: Option<BudgetBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    experience: Option<f64>,
}

impl ActiveFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected option identifiers for a multi-select facet; empty for every other facet.
    pub fn selected(&self, facet: FacetKey) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        match facet {
            FacetKey::Services => &self.services,
            FacetKey::Cities => &self.cities,
            FacetKey::Areas => &self.areas,
            _ => &EMPTY,
        }
    }

    pub fn budget(&self) -> Option<BudgetBounds> {
        self.budget
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn verified(&self) -> Option<bool> {
        self.verified
    }

    pub fn experience(&self) -> Option<f64> {
        self.experience
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
            && self.cities.is_empty()
            && self.areas.is_empty()
            && self.budget.is_none()
            && self.rating.is_none()
            && self.verified.is_none()
            && self.experience.is_none()
    }

    fn options_mut(&mut self, facet: FacetKey) -> Option<&mut BTreeSet<String>> {
        match facet {
            FacetKey::Services => Some(&mut self.services),
            FacetKey::Cities => Some(&mut self.cities),
            FacetKey::Areas => Some(&mut self.areas),
            _ => None,
        }
    }
}

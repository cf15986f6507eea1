use tracing::debug;

use super::{ActiveFilterSet, BudgetBounds, FacetSelection};
use crate::directory::domain::FacetKey;

impl ActiveFilterSet {
    /// Adds `value` to a multi-select facet, or removes it when already selected.
    /// Unknown or single-valued facet keys leave the set unchanged.
    pub fn toggle(&self, facet: &str, value: &str) -> Self {
        let mut next = self.clone();
        let Some(selected) = FacetKey::from_key(facet).and_then(|key| next.options_mut(key)) else {
            debug!(facet, "toggle ignored for non multi-select facet");
            return next;
        };

        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        next
    }

    /// Replaces one facet's value outright. `FacetSelection::Unset` clears the facet.
    /// Unknown keys and selections of the wrong shape leave the set unchanged.
    pub fn set_single(&self, facet: &str, selection: FacetSelection) -> Self {
        match FacetKey::from_key(facet) {
            Some(key) => self.with_selection(key, selection).unwrap_or_else(|| {
                debug!(facet, "selection does not fit facet; ignored");
                self.clone()
            }),
            None => {
                debug!(facet, "unknown facet key; ignored");
                self.clone()
            }
        }
    }

    /// Replaces the budget. Passing no bounds at all clears it.
    pub fn set_budget(&self, min: Option<f64>, max: Option<f64>) -> Self {
        let mut next = self.clone();
        let bounds = BudgetBounds::new(min, max);
        next.budget = (!bounds.is_unbounded()).then_some(bounds);
        next
    }

    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    /// Badge count: one per selected multi-select option plus one per set scalar facet.
    /// An open budget is no constraint and adds nothing.
    pub fn active_count(&self) -> usize {
        let options = self.services.len() + self.cities.len() + self.areas.len();
        let scalars = [
            self.budget.is_some_and(|bounds| !bounds.is_unbounded()),
            self.rating.is_some(),
            self.verified.is_some(),
            self.experience.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        options + scalars
    }

    /// Copy of this set with one facet replaced. `None` when the selection does not fit
    /// the facet (for example a flag for `rating`).
    pub(crate) fn with_selection(&self, facet: FacetKey, selection: FacetSelection) -> Option<Self> {
        let mut next = self.clone();
        match (facet, selection) {
            (key, FacetSelection::Options(values)) if key.is_multi_select() => {
                *next.options_mut(key)? = values;
            }
            (key, FacetSelection::Unset) if key.is_multi_select() => {
                next.options_mut(key)?.clear();
            }
            (FacetKey::Budget, FacetSelection::Budget(bounds)) => {
                next.budget = (!bounds.is_unbounded()).then_some(bounds)
            }
            (FacetKey::Budget, FacetSelection::Unset) => next.budget = None,
            (FacetKey::Rating, FacetSelection::Threshold(value)) => next.rating = Some(value),
            (FacetKey::Rating, FacetSelection::Unset) => next.rating = None,
            (FacetKey::Experience, FacetSelection::Threshold(value)) => {
                next.experience = Some(value)
            }
            (FacetKey::Experience, FacetSelection::Unset) => next.experience = None,
            (FacetKey::Verified, FacetSelection::Flag(value)) => next.verified = Some(value),
            (FacetKey::Verified, FacetSelection::Unset) => next.verified = None,
            _ => return None,
        }
        Some(next)
    }
}

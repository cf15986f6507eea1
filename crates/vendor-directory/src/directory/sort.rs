use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

use super::domain::VendorRecord;

/// Orderings the directory can apply on top of the provider's relevance ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "distance")]
    Distance,
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
}

impl SortKey {
    pub const fn all() -> [Self; 6] {
        [
            Self::Relevance,
            Self::PriceAsc,
            Self::PriceDesc,
            Self::Rating,
            Self::Experience,
            Self::Distance,
        ]
    }

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Experience => "experience",
            Self::Distance => "distance",
            Self::Relevance => "relevance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::Rating => "Top rated",
            Self::Experience => "Most experienced",
            Self::Distance => "Nearest first",
            Self::Relevance => "Most relevant",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all().into_iter().find(|key| key.as_key() == value)
    }

    /// Unrecognised keys fall back to the provider's relevance order.
    pub fn from_key_or_default(value: &str) -> Self {
        Self::from_key(value).unwrap_or_default()
    }
}

/// Returns a reordered copy; the input is left untouched. The sort is stable, so ties keep
/// their received order.
pub fn sort_vendors<V>(vendors: &[V], key: SortKey) -> Vec<V>
where
    V: Borrow<VendorRecord> + Clone,
{
    let mut ordered = vendors.to_vec();
    let compare: fn(&VendorRecord, &VendorRecord) -> Ordering = match key {
        SortKey::Relevance => return ordered,
        SortKey::PriceAsc => |a, b| ascending_missing_last(a.base_price, b.base_price),
        SortKey::PriceDesc => |a, b| descending_missing_last(a.base_price, b.base_price),
        SortKey::Rating => |a, b| b.rating.total_cmp(&a.rating),
        SortKey::Experience => |a, b| b.experience_years.total_cmp(&a.experience_years),
        SortKey::Distance => |a, b| ascending_missing_last(a.distance_km, b.distance_km),
    };
    ordered.sort_by(|a, b| {
        compare(
            <V as Borrow<VendorRecord>>::borrow(a),
            <V as Borrow<VendorRecord>>::borrow(b),
        )
    });
    ordered
}

fn ascending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    known(a)
        .unwrap_or(f64::INFINITY)
        .total_cmp(&known(b).unwrap_or(f64::INFINITY))
}

fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    known(b)
        .unwrap_or(f64::NEG_INFINITY)
        .total_cmp(&known(a).unwrap_or(f64::NEG_INFINITY))
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|value| !value.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str, price: Option<f64>, rating: f64, distance: Option<f64>) -> VendorRecord {
        let mut record = VendorRecord::new(id, format!("Vendor {id}"));
        record.base_price = price;
        record.rating = rating;
        record.distance_km = distance;
        record
    }

    fn ids(vendors: &[VendorRecord]) -> Vec<&str> {
        vendors.iter().map(|vendor| vendor.id.0.as_str()).collect()
    }

    fn sample() -> Vec<VendorRecord> {
        vec![
            vendor("a", Some(40000.0), 4.2, Some(3.5)),
            vendor("b", None, 4.8, None),
            vendor("c", Some(15000.0), 4.2, Some(1.0)),
            vendor("d", Some(90000.0), 3.9, Some(12.0)),
        ]
    }

    #[test]
    fn relevance_keeps_received_order() {
        let vendors = sample();
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::Relevance)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn price_ascending_puts_unpriced_vendors_last() {
        let vendors = sample();
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::PriceAsc)), ["c", "a", "d", "b"]);
    }

    #[test]
    fn price_descending_keeps_unpriced_vendors_off_the_top() {
        let vendors = sample();
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::PriceDesc)), ["d", "a", "c", "b"]);
    }

    #[test]
    fn rating_ties_preserve_input_order() {
        let vendors = sample();
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::Rating)), ["b", "a", "c", "d"]);

        let reversed: Vec<VendorRecord> = vendors.iter().rev().cloned().collect();
        assert_eq!(ids(&sort_vendors(&reversed, SortKey::Rating)), ["b", "c", "a", "d"]);
    }

    #[test]
    fn distance_sorts_nearest_first_with_unknown_last() {
        let vendors = sample();
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::Distance)), ["c", "a", "d", "b"]);
    }

    #[test]
    fn experience_sorts_descending() {
        let mut vendors = sample();
        vendors[0].experience_years = 2.0;
        vendors[3].experience_years = 11.0;
        assert_eq!(ids(&sort_vendors(&vendors, SortKey::Experience)), ["d", "a", "b", "c"]);
    }

    #[test]
    fn sorting_borrowed_vendors_does_not_touch_the_source() {
        let vendors = sample();
        let borrowed: Vec<&VendorRecord> = vendors.iter().collect();
        let sorted = sort_vendors(&borrowed, SortKey::PriceAsc);
        assert_eq!(sorted[0].id.0, "c");
        assert_eq!(ids(&vendors), ["a", "b", "c", "d"]);
    }

    #[test]
    fn unknown_sort_keys_fall_back_to_relevance() {
        assert_eq!(SortKey::from_key_or_default("popularity"), SortKey::Relevance);
        assert_eq!(SortKey::from_key(" price-desc "), Some(SortKey::PriceDesc));
        let parsed: SortKey = serde_json::from_str("\"price-asc\"").expect("sort key parses");
        assert_eq!(parsed, SortKey::PriceAsc);
    }
}

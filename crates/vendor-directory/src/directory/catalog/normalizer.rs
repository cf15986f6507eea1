use chrono::NaiveDate;

use super::parser::{RawScalar, RawServices, RawVendor};
use crate::directory::domain::{VendorId, VendorRecord};

/// Strips invisible characters and collapses whitespace. Case is kept; facet values match exactly.
pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `None` when the row carries no usable identifier.
pub(crate) fn normalize_vendor(raw: RawVendor, as_of: NaiveDate) -> Option<VendorRecord> {
    let id = raw.id.as_ref().and_then(text).filter(|id| !id.is_empty())?;

    let experience_years = match raw.experience_years.as_ref().and_then(number) {
        Some(years) => years.max(0.0),
        None => raw
            .established_on
            .as_ref()
            .and_then(text)
            .and_then(|value| NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok())
            .and_then(|established| as_of.years_since(established))
            .map(f64::from)
            .unwrap_or(0.0),
    };

    Some(VendorRecord {
        name: optional_text(raw.name.as_ref()).unwrap_or_else(|| id.clone()),
        id: VendorId(id),
        services: raw.services.map(services).unwrap_or_default(),
        base_price: raw
            .base_price
            .as_ref()
            .and_then(number)
            .filter(|price| *price >= 0.0),
        city: optional_text(raw.city.as_ref()),
        area: optional_text(raw.area.as_ref()),
        verified: raw.verified.as_ref().map(flag).unwrap_or(false),
        rating: raw.rating.as_ref().and_then(number).unwrap_or(0.0),
        experience_years,
        distance_km: raw
            .distance_km
            .as_ref()
            .and_then(number)
            .filter(|distance| *distance >= 0.0),
    })
}

fn optional_text(value: Option<&RawScalar>) -> Option<String> {
    value.and_then(text).filter(|value| !value.is_empty())
}

fn text(scalar: &RawScalar) -> Option<String> {
    match scalar {
        RawScalar::Text(value) => Some(normalize_text(value)),
        RawScalar::Number(value) if value.fract() == 0.0 => Some(format!("{}", *value as i64)),
        RawScalar::Number(value) => Some(value.to_string()),
        RawScalar::Flag(_) => None,
    }
}

fn number(scalar: &RawScalar) -> Option<f64> {
    let value = match scalar {
        RawScalar::Number(value) => *value,
        RawScalar::Text(value) => value.trim().replace(',', "").parse::<f64>().ok()?,
        RawScalar::Flag(_) => return None,
    };
    value.is_finite().then_some(value)
}

fn flag(scalar: &RawScalar) -> bool {
    match scalar {
        RawScalar::Flag(value) => *value,
        RawScalar::Number(value) => *value != 0.0,
        RawScalar::Text(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
    }
}

fn services(raw: RawServices) -> Vec<String> {
    let values: Vec<String> = match raw {
        RawServices::List(items) => items.iter().filter_map(text).collect(),
        RawServices::Joined(joined) => joined.split(['|', ',']).map(normalize_text).collect(),
    };

    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !value.is_empty() && !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

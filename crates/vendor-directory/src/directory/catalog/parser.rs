use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::io::Read;

/// Loosely typed scalar as providers send it: numbers, numeric strings, or flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawScalar {
    Number(f64),
    Flag(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawServices {
    List(Vec<RawScalar>),
    Joined(String),
}

/// Provider vendor payload before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawVendor {
    pub(crate) id: Option<RawScalar>,
    pub(crate) name: Option<RawScalar>,
    pub(crate) services: Option<RawServices>,
    pub(crate) base_price: Option<RawScalar>,
    pub(crate) city: Option<RawScalar>,
    pub(crate) area: Option<RawScalar>,
    pub(crate) verified: Option<RawScalar>,
    pub(crate) rating: Option<RawScalar>,
    pub(crate) experience_years: Option<RawScalar>,
    pub(crate) established_on: Option<RawScalar>,
    pub(crate) distance_km: Option<RawScalar>,
}

// Field names in lookup order; the first non-null entry wins when a provider sends several.
const ID_KEYS: &[&str] = &["id", "_id", "vendorId"];
const NAME_KEYS: &[&str] = &["name", "businessName"];
const SERVICE_KEYS: &[&str] = &["services", "serviceIds"];
const PRICE_KEYS: &[&str] = &["base_price", "basePrice", "price"];
const CITY_KEYS: &[&str] = &["city"];
const AREA_KEYS: &[&str] = &["area", "locality"];
const VERIFIED_KEYS: &[&str] = &["verified", "isVerified"];
const RATING_KEYS: &[&str] = &["rating"];
const EXPERIENCE_KEYS: &[&str] = &[
    "experience_years",
    "experienceYears",
    "yearsOfExperience",
    "experience",
];
const ESTABLISHED_KEYS: &[&str] = &["established_on", "establishedOn"];
const DISTANCE_KEYS: &[&str] = &["distance_km", "distanceKm", "distance"];

impl RawVendor {
    /// Reads one provider object. Fields of an unusable shape (arrays for a name, objects
    /// for a price) are dropped rather than failing the page.
    pub(crate) fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            id: scalar(object, ID_KEYS),
            name: scalar(object, NAME_KEYS),
            services: field(object, SERVICE_KEYS)
                .and_then(|value| RawServices::deserialize(value).ok()),
            base_price: scalar(object, PRICE_KEYS),
            city: scalar(object, CITY_KEYS),
            area: scalar(object, AREA_KEYS),
            verified: scalar(object, VERIFIED_KEYS),
            rating: scalar(object, RATING_KEYS),
            experience_years: scalar(object, EXPERIENCE_KEYS),
            established_on: scalar(object, ESTABLISHED_KEYS),
            distance_km: scalar(object, DISTANCE_KEYS),
        }
    }
}

fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn scalar(object: &Map<String, Value>, keys: &[&str]) -> Option<RawScalar> {
    field(object, keys).and_then(|value| RawScalar::deserialize(value).ok())
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<RawVendor>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    Ok(parse_json_values(values))
}

/// Non-object entries become empty vendors and are reported for their missing id.
pub(crate) fn parse_json_values(values: Vec<Value>) -> Vec<RawVendor> {
    values
        .iter()
        .map(|value| {
            value
                .as_object()
                .map(RawVendor::from_object)
                .unwrap_or_default()
        })
        .collect()
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawVendor>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut vendors = Vec::new();

    for record in csv_reader.deserialize::<CsvVendorRow>() {
        let row = record?;
        vendors.push(row.into_raw());
    }

    Ok(vendors)
}

#[derive(Debug, Deserialize)]
struct CsvVendorRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    services: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    base_price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    area: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    verified: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    experience_years: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    established_on: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    distance_km: Option<String>,
}

impl CsvVendorRow {
    fn into_raw(self) -> RawVendor {
        RawVendor {
            id: self.id.map(RawScalar::Text),
            name: self.name.map(RawScalar::Text),
            services: self.services.map(RawServices::Joined),
            base_price: self.base_price.map(RawScalar::Text),
            city: self.city.map(RawScalar::Text),
            area: self.area.map(RawScalar::Text),
            verified: self.verified.map(RawScalar::Text),
            rating: self.rating.map(RawScalar::Text),
            experience_years: self.experience_years.map(RawScalar::Text),
            established_on: self.established_on.map(RawScalar::Text),
            distance_km: self.distance_km.map(RawScalar::Text),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

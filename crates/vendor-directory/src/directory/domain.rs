use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier wrapper for vendors supplied by the search provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub String);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized vendor listing. Only the fields the directory filters and sorts on are modelled;
/// everything else stays with the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: VendorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub services: Vec<String>,
    /// `None` means the provider did not publish a price.
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl VendorRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: VendorId(id.into()),
            name: name.into(),
            services: Vec::new(),
            base_price: None,
            city: None,
            area: None,
            verified: false,
            rating: 0.0,
            experience_years: 0.0,
            distance_km: None,
        }
    }
}

/// Filterable dimensions of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKey {
    Services,
    Cities,
    Areas,
    Budget,
    Rating,
    Verified,
    Experience,
}

impl FacetKey {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Services,
            Self::Cities,
            Self::Areas,
            Self::Budget,
            Self::Rating,
            Self::Verified,
            Self::Experience,
        ]
    }

    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Cities => "cities",
            Self::Areas => "areas",
            Self::Budget => "budget",
            Self::Rating => "rating",
            Self::Verified => "verified",
            Self::Experience => "experience",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Cities => "City",
            Self::Areas => "Area",
            Self::Budget => "Budget",
            Self::Rating => "Rating",
            Self::Verified => "Verified vendors",
            Self::Experience => "Experience",
        }
    }

    /// Returns `None` for keys the directory does not know about.
    pub fn from_key(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|key| key.as_key() == value.trim())
    }

    pub const fn is_multi_select(self) -> bool {
        matches!(self, Self::Services | Self::Cities | Self::Areas)
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// One selectable value of an enumerable facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

/// Budget bracket offered by the `budget` facet. A missing bound is open on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    pub label: String,
}

/// Minimum-value option used by the `rating` and `experience` facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOption {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FacetOptions {
    Choices { options: Vec<FacetOption> },
    Ranges { ranges: Vec<BudgetRange> },
    Thresholds { thresholds: Vec<ThresholdOption> },
    Toggle,
}

/// Describes one filterable dimension and the options the UI can offer for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub key: FacetKey,
    pub label: String,
    #[serde(flatten)]
    pub options: FacetOptions,
}

/// Marginal counts keyed by `<facet>_<option>`, `budget_<index>`, or `<facet>_<threshold>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetCounts(BTreeMap<String, usize>);

impl FacetCounts {
    pub fn option_key(facet: FacetKey, value: &str) -> String {
        format!("{}_{}", facet.as_key(), value)
    }

    pub fn range_key(index: usize) -> String {
        format!("{}_{}", FacetKey::Budget.as_key(), index)
    }

    pub fn threshold_key(facet: FacetKey, threshold: f64) -> String {
        format!("{}_{}", facet.as_key(), threshold)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub(crate) fn insert(&mut self, key: String, count: usize) {
        self.0.insert(key, count);
    }
}

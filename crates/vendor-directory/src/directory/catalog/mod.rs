//! Adapter that turns search-provider payloads into `VendorRecord`s.
//!
//! Providers send loosely shaped vendors (numeric strings, aliased field names, blank cells).
//! Normalization happens once here so the filter predicates never re-implement fallbacks.

mod normalizer;
mod parser;

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use super::domain::VendorRecord;
use parser::RawVendor;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read vendor catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vendor CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid vendor JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vendor at position {position} is missing field `{field}`")]
    MissingField {
        position: usize,
        field: &'static str,
    },
    #[error("unsupported catalog format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}

/// Normalized vendor list for one provider response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorCatalog {
    vendors: Vec<VendorRecord>,
}

impl VendorCatalog {
    /// Reads a JSON array of provider vendor objects.
    pub fn from_json_reader<R: Read>(
        reader: R,
        as_of: NaiveDate,
    ) -> Result<Self, CatalogImportError> {
        let raw = parser::parse_json(reader)?;
        Self::from_raw(raw, as_of)
    }

    pub fn from_json_values(
        values: Vec<serde_json::Value>,
        as_of: NaiveDate,
    ) -> Result<Self, CatalogImportError> {
        let raw = parser::parse_json_values(values);
        Self::from_raw(raw, as_of)
    }

    /// Reads the provider CSV export; `services` cells are `|`-separated.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        as_of: NaiveDate,
    ) -> Result<Self, CatalogImportError> {
        let raw = parser::parse_csv(reader)?;
        Self::from_raw(raw, as_of)
    }

    /// Picks the parser from the file extension.
    pub fn from_path(
        path: impl AsRef<Path>,
        as_of: NaiveDate,
    ) -> Result<Self, CatalogImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Self::from_csv_reader(BufReader::new(File::open(path)?), as_of),
            "json" => Self::from_json_reader(BufReader::new(File::open(path)?), as_of),
            _ => Err(CatalogImportError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    pub fn vendors(&self) -> &[VendorRecord] {
        &self.vendors
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    fn from_raw(raw: Vec<RawVendor>, as_of: NaiveDate) -> Result<Self, CatalogImportError> {
        let vendors = raw
            .into_iter()
            .enumerate()
            .map(|(position, vendor)| {
                normalizer::normalize_vendor(vendor, as_of)
                    .ok_or(CatalogImportError::MissingField { position, field: "id" })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(vendors = vendors.len(), %as_of, "normalized vendor catalog");
        Ok(Self { vendors })
    }
}

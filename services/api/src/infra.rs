use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vendor_directory::directory::{CatalogImportError, SortKey, VendorCatalog};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const SAMPLE_CATALOG: &str = include_str!("../data/sample_vendors.json");

/// Bundled provider page used by the demo command.
pub(crate) fn sample_catalog(as_of: NaiveDate) -> Result<VendorCatalog, CatalogImportError> {
    VendorCatalog::from_json_reader(SAMPLE_CATALOG.as_bytes(), as_of)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_sort(raw: &str) -> Result<SortKey, String> {
    SortKey::from_key(raw).ok_or_else(|| {
        let known = SortKey::all()
            .iter()
            .map(|key| key.as_key())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown sort '{raw}' (expected one of: {known})")
    })
}

use axum::{extract::State, routing::post, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::catalog::VendorCatalog;
use super::domain::FacetDescriptor;
use super::filters::ActiveFilterSet;
use super::search::{DirectorySearch, SearchResults};
use super::sort::SortKey;
use crate::config::DirectoryConfig;
use crate::error::AppError;

/// Search request as the listing page posts it: the provider page plus the UI's selection.
#[derive(Debug, Deserialize)]
pub struct VendorSearchRequest {
    pub vendors: Vec<serde_json::Value>,
    #[serde(default)]
    pub filters: ActiveFilterSet,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub descriptors: Option<Vec<FacetDescriptor>>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Router builder exposing the faceted search endpoint.
pub fn directory_router(config: DirectoryConfig) -> Router {
    Router::new()
        .route("/api/v1/vendors/search", post(search_handler))
        .with_state(config)
}

pub(crate) async fn search_handler(
    State(config): State<DirectoryConfig>,
    Json(request): Json<VendorSearchRequest>,
) -> Result<Json<SearchResults>, AppError> {
    let VendorSearchRequest {
        vendors,
        filters,
        sort,
        descriptors,
        as_of,
    } = request;

    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let catalog = VendorCatalog::from_json_values(vendors, as_of)?;

    let sort = sort
        .as_deref()
        .map(SortKey::from_key_or_default)
        .unwrap_or(config.default_sort);
    let search = DirectorySearch {
        filters,
        sort,
        descriptors,
    };

    Ok(Json(search.run(catalog.vendors())))
}

//! Catalog listing handlers.

use crate::dtos::{CatalogItemResponse, PackageResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// List every individually priced item, in category order.
///
/// GET /v1/catalog/items
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<CatalogItemResponse>> {
    Json(
        state
            .quotes
            .catalog()
            .items()
            .map(CatalogItemResponse::from)
            .collect(),
    )
}

/// GET /v1/catalog/packages
pub async fn list_packages(State(state): State<AppState>) -> Json<Vec<PackageResponse>> {
    Json(
        state
            .quotes
            .catalog()
            .packages()
            .map(PackageResponse::from)
            .collect(),
    )
}

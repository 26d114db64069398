use crate::dtos::EstimateRequest;
use crate::models::QuantityEstimate;
use crate::services::{estimate_quantities, metrics};
use axum::Json;
use service_core::error::AppError;
use service_core::utils::validation::ValidatedJson;

/// Rough quantities from floor area.
///
/// POST /v1/estimates
pub async fn estimate(
    ValidatedJson(req): ValidatedJson<EstimateRequest>,
) -> Result<Json<QuantityEstimate>, AppError> {
    let estimate = estimate_quantities(req.floor_area).map_err(|e| {
        metrics::record_error(&e);
        e
    })?;

    tracing::debug!(
        floor_area = %estimate.floor_area,
        wall_area = %estimate.wall_area,
        doors = estimate.door_count,
        "Quantities estimated"
    );

    Ok(Json(estimate))
}

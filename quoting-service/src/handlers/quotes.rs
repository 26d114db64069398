//! Quote handlers.

use crate::dtos::{CompareRequest, CreateQuoteRequest, QuickQuoteRequest, QuoteResponse};
use crate::error::PricingError;
use crate::models::{ComparisonResult, ProjectParameters, QuoteRequest};
use crate::services::{metrics, PricedQuote};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;
use service_core::utils::validation::ValidatedJson;
use std::time::Instant;

fn track(err: PricingError) -> AppError {
    metrics::record_error(&err);
    tracing::warn!(error = %err, error_type = err.error_type(), "Pricing request failed");
    AppError::from(err)
}

fn respond(state: &AppState, kind: &str, priced: PricedQuote, started: Instant) -> QuoteResponse {
    let summary = state.quotes.summarize(&priced.quote);
    let validation = state.quotes.validate_quote(&priced.quote);

    let mut warnings = priced.warnings;
    warnings.extend(summary.totals.warnings.iter().cloned());

    metrics::record_quote(
        kind,
        priced.quote.lines(),
        &summary.totals,
        started.elapsed().as_secs_f64(),
    );
    metrics::record_warnings(&warnings);

    tracing::info!(
        quote_id = %summary.quote_id,
        kind = kind,
        lines = summary.lines.len(),
        total = %summary.totals.total,
        valid = validation.valid,
        "Quote computed"
    );

    QuoteResponse {
        summary,
        warnings,
        validation,
    }
}

/// Price a set of item and package selections.
///
/// POST /v1/quotes
pub async fn create_quote(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let started = Instant::now();
    let request = QuoteRequest::from(req);
    let priced = state.quotes.build_quote(&request).map_err(track)?;

    Ok((
        StatusCode::CREATED,
        Json(respond(&state, "itemized", priced, started)),
    ))
}

/// One package for the whole property.
///
/// POST /v1/quotes/quick
pub async fn quick_quote(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<QuickQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let started = Instant::now();
    let project = ProjectParameters::from(req.project);
    let quote = state
        .quotes
        .quick_quote(project, &req.package_code)
        .map_err(track)?;
    let priced = PricedQuote {
        quote,
        warnings: Vec::new(),
    };

    Ok((
        StatusCode::CREATED,
        Json(respond(&state, "quick", priced, started)),
    ))
}

/// Itemized selection priced against a package.
///
/// POST /v1/quotes/compare
pub async fn compare(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CompareRequest>,
) -> Result<Json<ComparisonResult>, AppError> {
    let started = Instant::now();
    let project = ProjectParameters::from(req.project);
    let quality = req.quality.unwrap_or(project.quality);
    let area = req.area.unwrap_or(project.floor_area);

    let mut request = QuoteRequest::new(project);
    request.items = req.items.into_iter().map(Into::into).collect();

    let priced = state.quotes.build_quote(&request).map_err(track)?;
    metrics::record_warnings(&priced.warnings);

    let result = state
        .quotes
        .compare_with_package(&priced.quote, &req.package_code, quality, area)
        .map_err(track)?;

    metrics::QUOTES_TOTAL.with_label_values(&["comparison"]).inc();
    metrics::QUOTE_DURATION
        .with_label_values(&["comparison"])
        .observe(started.elapsed().as_secs_f64());

    tracing::info!(
        package = %result.package_code,
        savings = %result.savings,
        recommendation = result.recommendation.as_str(),
        "Package comparison served"
    );

    Ok(Json(result))
}

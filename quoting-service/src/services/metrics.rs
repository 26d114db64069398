//! Prometheus metrics for quoting-service.

use crate::error::PricingError;
use crate::models::{LineItem, QuoteTotals, ValidationWarning};
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec, TextEncoder,
};
use rust_decimal::prelude::ToPrimitive;

/// Quote counter by kind (itemized, quick, comparison).
pub static QUOTES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "quoting_quotes_total",
        "Total number of quotes computed by kind",
        &["kind"]
    )
    .expect("Failed to register quotes_total")
});

/// Line counter by kind.
pub static LINE_ITEMS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "quoting_line_items_total",
        "Total number of priced lines by kind",
        &["kind"] // item, package
    )
    .expect("Failed to register line_items_total")
});

/// Error counter for alerting.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "quoting_errors_total",
        "Total number of pricing errors by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Warning counter by kind.
pub static WARNINGS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "quoting_warnings_total",
        "Total number of non-fatal validation warnings by kind",
        &["kind"]
    )
    .expect("Failed to register warnings_total")
});

/// Quoted amount counter by tax policy.
pub static QUOTE_AMOUNT_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "quoting_quote_amount_total",
        "Total quoted amount (tax included) by tax policy",
        &["tax_policy"]
    )
    .expect("Failed to register quote_amount_total")
});

/// Quote computation duration histogram.
pub static QUOTE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "quoting_quote_duration_seconds",
        "Quote computation duration in seconds",
        &["kind"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1]
    )
    .expect("Failed to register quote_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&QUOTES_TOTAL);
    Lazy::force(&LINE_ITEMS_TOTAL);
    Lazy::force(&ERRORS_TOTAL);
    Lazy::force(&WARNINGS_TOTAL);
    Lazy::force(&QUOTE_AMOUNT_TOTAL);
    Lazy::force(&QUOTE_DURATION);
    service_core::observability::init_http_metrics();
}

/// Record a computed quote of `kind` with its lines and totals.
pub fn record_quote(kind: &str, lines: &[LineItem], totals: &QuoteTotals, elapsed_secs: f64) {
    QUOTES_TOTAL.with_label_values(&[kind]).inc();
    QUOTE_DURATION.with_label_values(&[kind]).observe(elapsed_secs);
    for line in lines {
        let line_kind = if line.is_package() { "package" } else { "item" };
        LINE_ITEMS_TOTAL.with_label_values(&[line_kind]).inc();
    }
    QUOTE_AMOUNT_TOTAL
        .with_label_values(&[totals.tax_policy.as_str()])
        .inc_by(totals.total.to_f64().unwrap_or_default().max(0.0));
}

pub fn record_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        WARNINGS_TOTAL.with_label_values(&[warning.kind()]).inc();
    }
}

pub fn record_error(err: &PricingError) {
    ERRORS_TOTAL.with_label_values(&[err.error_type()]).inc();
}

/// Get metrics in Prometheus text format, HTTP metrics first.
pub fn get_metrics() -> String {
    let mut output = service_core::observability::render_http_metrics();

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    output.push_str(&encoder.encode_to_string(&metric_families).unwrap_or_default());
    output
}

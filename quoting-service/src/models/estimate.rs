//! Rough quantity estimates derived from floor area alone.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateConfidence {
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityEstimate {
    pub floor_area: Decimal,
    pub wall_area: Decimal,
    pub skirting_length: Decimal,
    pub door_count: u32,
    pub confidence: EstimateConfidence,
}

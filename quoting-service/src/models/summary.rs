//! Read models consumed by the document and persistence layers.

use super::{CategorySubtotal, LineItem, QualityTier, QuoteTotals, WorkCategory};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// One rendered line, with its derived subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    pub category: WorkCategory,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub quality: QualityTier,
    pub is_package: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&LineItem> for LineSummary {
    fn from(line: &LineItem) -> Self {
        Self {
            category: line.category(),
            code: line.code().to_string(),
            description: line.description().to_string(),
            unit: line.unit().to_string(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            subtotal: line.subtotal(),
            quality: line.quality(),
            is_package: line.is_package(),
            included_items: line.included_items().to_vec(),
            notes: line.notes().map(str::to_string),
        }
    }
}

/// Everything a renderer needs, already computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub quote_id: Uuid,
    pub quote_number: String,
    pub created_utc: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub lines: Vec<LineSummary>,
    pub breakdown: Vec<CategorySubtotal>,
    pub totals: QuoteTotals,
}

/// Business-rule check over a finished quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

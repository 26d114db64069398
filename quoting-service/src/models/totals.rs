//! Computed totals and package comparison results.

use super::ValidationWarning;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where cent rounding happens in the totals chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Every intermediate value is rounded before feeding the next step.
    #[default]
    EveryStep,
    /// Full precision through the chain; each reported value rounded once.
    AtEnd,
}

/// Result of running the totals chain over a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub rounding_mode: RoundingMode,
    pub subtotal: Decimal,
    pub discount_percentage: Decimal,
    pub discount_amount: Decimal,
    pub taxable_base: Decimal,
    pub rounding_percentage: Decimal,
    pub rounding_surcharge: Decimal,
    pub tax_base: Decimal,
    pub tax_percentage: Decimal,
    pub tax_policy: String,
    pub tax_amount: Decimal,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Package,
    KeepCurrent,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Package => "package",
            Recommendation::KeepCurrent => "keep_current",
        }
    }
}

/// Itemized quote priced against a package alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub package_code: String,
    /// Pre-discount, pre-tax subtotal of the itemized quote.
    pub current_price: Decimal,
    pub package_price: Decimal,
    pub savings: Decimal,
    /// Savings as a share of the current price, one decimal place.
    pub savings_percentage: Decimal,
    pub recommendation: Recommendation,
}

//! Non-fatal validation signals returned alongside results.

use super::{QualityTier, WorkCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Discount was outside [0, 100] and got clamped.
    DiscountClamped { requested: Decimal, applied: Decimal },
    /// Subtotal is zero or negative; the quote is computable but meaningless.
    NonPositiveSubtotal { subtotal: Decimal },
    /// Requested tier has no price for this item; the standard tier was used.
    QualityFallback {
        category: WorkCategory,
        code: String,
        requested: QualityTier,
    },
}

impl ValidationWarning {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationWarning::DiscountClamped { .. } => "discount_clamped",
            ValidationWarning::NonPositiveSubtotal { .. } => "non_positive_subtotal",
            ValidationWarning::QualityFallback { .. } => "quality_fallback",
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::DiscountClamped { requested, applied } => {
                write!(f, "Discount {}% clamped to {}%", requested, applied)
            }
            ValidationWarning::NonPositiveSubtotal { subtotal } => {
                write!(f, "Quote subtotal is not positive ({})", subtotal)
            }
            ValidationWarning::QualityFallback {
                category,
                code,
                requested,
            } => write!(
                f,
                "No {} price for {}/{}; standard price used",
                requested, category, code
            ),
        }
    }
}

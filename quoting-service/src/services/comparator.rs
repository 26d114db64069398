//! Itemized quote versus package price.

use crate::error::PricingError;
use crate::models::{ComparisonResult, QualityTier, Quote, Recommendation};
use crate::money::round_money;
use crate::services::Catalog;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Comparator {
    catalog: Arc<Catalog>,
}

impl Comparator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Compare the pre-discount, pre-tax subtotal of `quote` with the price of
    /// `package_code` for the same area. Does not touch the quote.
    pub fn compare_items_vs_package(
        &self,
        quote: &Quote,
        package_code: &str,
        quality: QualityTier,
        area: Decimal,
    ) -> Result<ComparisonResult, PricingError> {
        let package_price = self.catalog.price_for_package(package_code, quality, area)?;
        let current_price = quote.subtotal();
        let savings = round_money(current_price - package_price);

        let savings_percentage = if current_price > Decimal::ZERO {
            (savings / current_price * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        };

        let recommendation = if savings > Decimal::ZERO {
            Recommendation::Package
        } else {
            Recommendation::KeepCurrent
        };

        debug!(
            package = %package_code,
            current_price = %current_price,
            package_price = %package_price,
            savings = %savings,
            recommendation = recommendation.as_str(),
            "Package comparison computed"
        );

        Ok(ComparisonResult {
            package_code: package_code.to_string(),
            current_price,
            package_price,
            savings,
            savings_percentage,
            recommendation,
        })
    }
}

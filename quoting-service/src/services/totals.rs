//! Totals calculator.
//!
//! Chain, in this order: subtotal, discount, taxable base, rounding
//! surcharge, tax base, tax, total. The order matters: the surcharge is
//! charged on the discounted amount and tax is charged on the surcharge.

use crate::models::{ProjectParameters, Quote, QuoteTotals, RoundingMode, ValidationWarning};
use crate::money::{percent_of, round_money};
use rust_decimal::Decimal;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

/// Chooses the tax percentage that applies to a project.
pub trait TaxRatePolicy: Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn rate_for(&self, project: &ProjectParameters) -> Decimal;
}

/// Same rate for every project.
#[derive(Debug, Clone, Copy)]
pub struct UniformTaxRate {
    pub rate: Decimal,
}

impl TaxRatePolicy for UniformTaxRate {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn rate_for(&self, _project: &ProjectParameters) -> Decimal {
        self.rate
    }
}

/// Reduced rate for a dwelling the owner lives in, general rate otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ReducedResidentialTaxRate {
    pub general_rate: Decimal,
    pub reduced_rate: Decimal,
}

impl TaxRatePolicy for ReducedResidentialTaxRate {
    fn name(&self) -> &'static str {
        "reduced_residential"
    }

    fn rate_for(&self, project: &ProjectParameters) -> Decimal {
        if project.property_type.is_residential() && project.primary_residence {
            self.reduced_rate
        } else {
            self.general_rate
        }
    }
}

#[derive(Debug, Clone)]
pub struct TotalsCalculator {
    rounding_percentage: Decimal,
    tax_policy: Arc<dyn TaxRatePolicy>,
}

impl TotalsCalculator {
    pub fn new(rounding_percentage: Decimal, tax_policy: Arc<dyn TaxRatePolicy>) -> Self {
        Self {
            rounding_percentage,
            tax_policy,
        }
    }

    pub fn rounding_percentage(&self) -> Decimal {
        self.rounding_percentage
    }

    pub fn tax_policy(&self) -> &dyn TaxRatePolicy {
        self.tax_policy.as_ref()
    }

    /// Totals with every intermediate value rounded to cents.
    pub fn compute(&self, quote: &Quote) -> QuoteTotals {
        self.compute_with(quote, RoundingMode::EveryStep)
    }

    pub fn compute_with(&self, quote: &Quote, mode: RoundingMode) -> QuoteTotals {
        let discount_percentage = quote.discount_percentage();
        let tax_percentage = self.tax_policy.rate_for(quote.project());

        // Rounded at every step when EveryStep, untouched when AtEnd.
        let step = |value: Decimal| match mode {
            RoundingMode::EveryStep => round_money(value),
            RoundingMode::AtEnd => value,
        };

        let subtotal = step(quote.lines().iter().map(|l| l.subtotal()).sum());
        let discount_amount = step(percent_of(subtotal, discount_percentage));
        let taxable_base = subtotal - discount_amount;
        let rounding_surcharge = step(percent_of(taxable_base, self.rounding_percentage));
        let tax_base = taxable_base + rounding_surcharge;
        let tax_amount = step(percent_of(tax_base, tax_percentage));
        let total = tax_base + tax_amount;

        let mut warnings = Vec::new();
        if subtotal <= Decimal::ZERO {
            warn!(
                quote_id = %quote.quote_id(),
                subtotal = %subtotal,
                "Quote subtotal is not positive"
            );
            warnings.push(ValidationWarning::NonPositiveSubtotal {
                subtotal: round_money(subtotal),
            });
        }

        let totals = QuoteTotals {
            rounding_mode: mode,
            subtotal: round_money(subtotal),
            discount_percentage,
            discount_amount: round_money(discount_amount),
            taxable_base: round_money(taxable_base),
            rounding_percentage: self.rounding_percentage,
            rounding_surcharge: round_money(rounding_surcharge),
            tax_base: round_money(tax_base),
            tax_percentage,
            tax_policy: self.tax_policy.name().to_string(),
            tax_amount: round_money(tax_amount),
            total: round_money(total),
            warnings,
        };

        debug!(
            quote_id = %quote.quote_id(),
            mode = ?mode,
            subtotal = %totals.subtotal,
            tax_percentage = %tax_percentage,
            total = %totals.total,
            "Quote totals computed"
        );

        totals
    }
}

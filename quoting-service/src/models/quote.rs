//! Quote model: the ordered set of priced lines for one project.

use super::{LineItem, ProjectParameters, QuoteTotals, ValidationWarning, WorkCategory};
use crate::money::round_money;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days a quote stays valid when nothing else is configured.
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// A quote under construction.
///
/// Owns its lines exclusively; insertion order is display order. All money
/// figures are derived on read, nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    quote_id: Uuid,
    project: ProjectParameters,
    lines: Vec<LineItem>,
    discount_percentage: Decimal,
    validity_days: u32,
    created_utc: DateTime<Utc>,
}

/// Summed subtotal of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySubtotal {
    pub category: WorkCategory,
    pub name: &'static str,
    pub amount: Decimal,
}

/// Persisted snapshot of a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote_id: Uuid,
    pub quote_number: String,
    pub project: ProjectParameters,
    pub lines: Vec<LineItem>,
    pub discount_percentage: Decimal,
    pub validity_days: u32,
    pub created_utc: DateTime<Utc>,
    /// Pricing in force when the quote was persisted. Reloads recompute with
    /// these, not with whatever is configured at reload time.
    pub rounding_percentage: Decimal,
    pub tax_percentage: Decimal,
    pub tax_policy: String,
    /// Total at the time of persisting; checked again on reload.
    pub total: Decimal,
}

impl Quote {
    pub fn new(project: ProjectParameters) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            project,
            lines: Vec::new(),
            discount_percentage: Decimal::ZERO,
            validity_days: DEFAULT_VALIDITY_DAYS,
            created_utc: Utc::now(),
        }
    }

    pub fn with_validity_days(mut self, days: u32) -> Self {
        self.validity_days = days.max(1);
        self
    }

    pub fn quote_id(&self) -> Uuid {
        self.quote_id
    }

    pub fn project(&self) -> &ProjectParameters {
        &self.project
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn discount_percentage(&self) -> Decimal {
        self.discount_percentage
    }

    pub fn validity_days(&self) -> u32 {
        self.validity_days
    }

    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    /// Human-facing number derived from the creation time.
    pub fn quote_number(&self) -> String {
        format!("Q-{}", self.created_utc.format("%Y%m%d%H%M%S"))
    }

    pub fn valid_until(&self) -> DateTime<Utc> {
        self.created_utc + Duration::days(i64::from(self.validity_days))
    }

    pub fn add_line(&mut self, line: LineItem) {
        self.lines.push(line);
    }

    pub fn add_lines(&mut self, lines: impl IntoIterator<Item = LineItem>) {
        self.lines.extend(lines);
    }

    /// Remove the line at `index`. Out-of-range indexes are a no-op returning
    /// false, since UI undo/redo can race with removals.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if index < self.lines.len() {
            let removed = self.lines.remove(index);
            tracing::debug!(code = %removed.code(), index = index, "Line removed from quote");
            true
        } else {
            false
        }
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Set the discount, clamping into [0, 100].
    ///
    /// Returns a warning when the requested value had to be clamped.
    pub fn set_discount_percentage(&mut self, percentage: Decimal) -> Option<ValidationWarning> {
        let applied = percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        self.discount_percentage = applied;

        if applied != percentage {
            tracing::warn!(
                requested = %percentage,
                applied = %applied,
                "Discount percentage out of range, clamped"
            );
            Some(ValidationWarning::DiscountClamped {
                requested: percentage,
                applied,
            })
        } else {
            None
        }
    }

    /// Sum of line subtotals, rounded to cents.
    pub fn subtotal(&self) -> Decimal {
        round_money(self.lines.iter().map(LineItem::subtotal).sum())
    }

    /// Subtotal per category in fixed category order, skipping zero sums.
    pub fn breakdown_by_category(&self) -> Vec<CategorySubtotal> {
        WorkCategory::ALL
            .iter()
            .filter_map(|category| {
                let amount: Decimal = self
                    .lines
                    .iter()
                    .filter(|line| line.category() == *category)
                    .map(LineItem::subtotal)
                    .sum();
                let amount = round_money(amount);
                (!amount.is_zero()).then(|| CategorySubtotal {
                    category: *category,
                    name: category.display_name(),
                    amount,
                })
            })
            .collect()
    }

    /// Snapshot for persistence, stamped with the totals computed by the caller.
    pub fn to_record(&self, totals: &QuoteTotals) -> QuoteRecord {
        QuoteRecord {
            quote_id: self.quote_id,
            quote_number: self.quote_number(),
            project: self.project.clone(),
            lines: self.lines.clone(),
            discount_percentage: self.discount_percentage,
            validity_days: self.validity_days,
            created_utc: self.created_utc,
            rounding_percentage: totals.rounding_percentage,
            tax_percentage: totals.tax_percentage,
            tax_policy: totals.tax_policy.clone(),
            total: totals.total,
        }
    }

    /// Rebuild a quote from a snapshot. Lines were already validated while
    /// deserializing; the discount goes through the usual clamp and any clamp
    /// warning is handed back.
    pub fn from_record(record: QuoteRecord) -> (Self, Option<ValidationWarning>) {
        let mut quote = Self {
            quote_id: record.quote_id,
            project: record.project,
            lines: record.lines,
            discount_percentage: Decimal::ZERO,
            validity_days: record.validity_days.max(1),
            created_utc: record.created_utc,
        };
        let warning = quote.set_discount_percentage(record.discount_percentage);
        (quote, warning)
    }
}
